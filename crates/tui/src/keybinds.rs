pub struct Keybinds;

impl Default for Keybinds {
    fn default() -> Self {
        Self
    }
}

impl Keybinds {
    pub fn help_text(&self) -> String {
        r#"Keyboard Shortcuts:

Navigation:
  Tab / Shift+Tab   Next/previous panel
  ↑ / ↓             Scroll focused panel
  PgUp / PgDn       Scroll by a page
  < / >             Resize side panels
  Click             Focus panel

Data:
  r                 Reload conversations

General:
  ?                 Toggle this help
  Shift + E         Show latest error details
  q / Ctrl + Q      Quit

Mouse:
  Scroll            Scroll panel under cursor
"#
        .to_string()
    }
}

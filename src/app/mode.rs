#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Bubbles on screen; single keys adjust settings
    Viewing,
    /// Typing into the command line
    Command,
    /// Typing into the text itself; bubbles follow every keystroke
    Editing,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_are_distinct() {
        let modes = [AppMode::Viewing, AppMode::Command, AppMode::Editing, AppMode::Quit];
        for (i, a) in modes.iter().enumerate() {
            for (j, b) in modes.iter().enumerate() {
                assert_eq!(a == b, i == j);
            }
        }
    }
}

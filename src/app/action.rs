#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// The revealed button on a preview card was clicked.
    Say { index: usize },
    Quit,
}

use super::Literal;

/// Options following a table's closing parenthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub engine: Option<String>,
    pub charset: Option<String>,
    pub collation: Option<String>,
    pub comment: Option<String>,

    /// Any other option, in declaration order
    pub extra: Vec<(String, Literal)>,
}

impl TableOptions {
    pub fn is_empty(&self) -> bool {
        self.engine.is_none()
            && self.charset.is_none()
            && self.collation.is_none()
            && self.comment.is_none()
            && self.extra.is_empty()
    }
}

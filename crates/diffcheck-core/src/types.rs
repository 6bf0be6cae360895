#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub file: Option<String>,
    pub removed: Vec<String>,
    pub added: Vec<String>,
}

impl Hunk {
    pub fn new(file: Option<String>) -> Hunk {
        Hunk {
            file,
            removed: Vec::new(),
            added: Vec::new(),
        }
    }
}

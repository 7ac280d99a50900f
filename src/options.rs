#[derive(Clone, Debug)]
pub struct Options {
    pub attributes: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            attributes: None,
        }
    }
}

//! At-most-one-open accordion.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// `len` sections with the first one open.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: if len > 0 { Some(0) } else { None },
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Close `index` if it is open, otherwise open it (closing any other).
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_open_by_default() {
        assert_eq!(Accordion::new(3).open_index(), Some(0));
        assert_eq!(Accordion::new(0).open_index(), None);
    }

    #[test]
    fn test_toggle() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(0);
        assert_eq!(accordion.open_index(), None);

        accordion.toggle(2);
        assert!(accordion.is_open(2));

        accordion.toggle(1);
        assert!(accordion.is_open(1));
        assert!(!accordion.is_open(2));

        accordion.toggle(7);
        assert!(accordion.is_open(1));
    }
}

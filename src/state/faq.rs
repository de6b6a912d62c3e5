/// Accordion state: at most one answer is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqDisclosure {
    expanded: Option<usize>,
}

impl FaqDisclosure {
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    pub fn toggle(self, index: usize) -> Self {
        let expanded = if self.is_expanded(index) { None } else { Some(index) };
        FaqDisclosure { expanded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let faq = FaqDisclosure::default().toggle(1).toggle(3);
        assert!(faq.is_expanded(3));
        assert!(!faq.is_expanded(1));
        assert_eq!(faq.expanded(), Some(3));
    }

    #[test]
    fn toggling_open_item_closes_all() {
        let faq = FaqDisclosure::default().toggle(2).toggle(2);
        assert_eq!(faq.expanded(), None);
        assert!((0..5).all(|i| !faq.is_expanded(i)));
    }
}

//! Fixed, in-flash list of pages shown on the OLED.
//!
//! Each page is one string; `'\n'` starts a new display row.

/// Pages of the BitDogLab demo.
pub static DEFAULT_PAGES: [&str; 4] = [
    "              \n\
     |Bem vindo! |\n\
     |            |\n\
     |ALUNO    |\n\
     |            |\n\
     |TADS Info 2B|\n\
     \x20             \n",
    "Pagina 2\n\n\
     Com programacao \n\n\
     e robotica\n\
     \x20               \n",
    "Pagina 3\n\n\
     O ceu e limite.",
    "Pagina 4\n\n\
     Obrigado",
];

/// Immutable, non-empty sequence of pages.
#[derive(Clone, Copy, Debug)]
pub struct PageCatalog {
    pages: &'static [&'static str],
}

impl PageCatalog {
    /// Wrap a page list. Returns `None` for an empty list.
    pub const fn new(pages: &'static [&'static str]) -> Option<Self> {
        if pages.is_empty() {
            None
        } else {
            Some(Self { pages })
        }
    }

    /// The built-in demo pages.
    pub const fn builtin() -> Self {
        Self {
            pages: &DEFAULT_PAGES,
        }
    }

    /// Number of pages (always ≥ 1).
    pub const fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always `false`; a catalog holds at least one page.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Index of the last page.
    pub const fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    /// Content of page `index`, if it exists.
    pub fn page(&self, index: usize) -> Option<&'static str> {
        self.pages.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_four_pages() {
        let catalog = PageCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.last_index(), 3);
        assert!(catalog.page(0).unwrap().contains("|Bem vindo! |"));
        assert_eq!(catalog.page(2), Some("Pagina 3\n\nO ceu e limite."));
        assert_eq!(catalog.page(4), None);
    }

    #[test]
    fn multiline_literals_keep_leading_spaces() {
        let catalog = PageCatalog::builtin();
        let first = catalog.page(0).unwrap();
        assert!(first.starts_with("              \n|Bem"));
        assert!(first.ends_with("\n              \n"));
        assert_eq!(
            catalog.page(1),
            Some("Pagina 2\n\nCom programacao \n\ne robotica\n                \n")
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        static NONE: [&str; 0] = [];
        assert!(PageCatalog::new(&NONE).is_none());
    }

    #[test]
    fn single_page_catalog() {
        static ONE: [&str; 1] = ["only"];
        let catalog = PageCatalog::new(&ONE).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.last_index(), 0);
    }
}

use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookChanges;
use crate::core::library::{LibraryError, LibraryResult};

// Node is an arena slot of the catalog, prev/next are slot indices rather than references.
#[derive(Debug, Clone)]
struct Node {
    book: BookEntity,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Catalog is an ordered collection of books unique by ISBN.
///
/// Books live in an arena of slots linked in both directions, so insertion at
/// either end and removal of a located node only relink neighbours. Freed slots
/// are recycled by later insertions. Lookups are linear scans from the head.
#[derive(Debug, Clone, Default)]
pub(crate) struct Catalog {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<&BookEntity> {
        self.head.map(|ndx| &self.node(ndx).book)
    }

    pub fn tail(&self) -> Option<&BookEntity> {
        self.tail.map(|ndx| &self.node(ndx).book)
    }

    pub fn contains_key(&self, isbn: &str) -> bool {
        self.locate(isbn).is_some()
    }

    pub fn insert_at_head(&mut self, book: BookEntity) -> LibraryResult<()> {
        self.check_unique(&book)?;
        let ndx = self.alloc(book, None, self.head);
        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(ndx),
            None => self.tail = Some(ndx),
        }
        self.head = Some(ndx);
        self.len += 1;
        Ok(())
    }

    pub fn insert_at_tail(&mut self, book: BookEntity) -> LibraryResult<()> {
        self.check_unique(&book)?;
        let ndx = self.alloc(book, self.tail, None);
        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(ndx),
            None => self.head = Some(ndx),
        }
        self.tail = Some(ndx);
        self.len += 1;
        Ok(())
    }

    /// Inserts so that the book ends up at zero-based `index`. Out of range
    /// indices are clamped: `index <= 0` inserts at head and `index >= len`
    /// inserts at tail.
    pub fn insert_at_position(&mut self, book: BookEntity, index: i64) -> LibraryResult<()> {
        if index <= 0 {
            return self.insert_at_head(book);
        }
        if index as u64 >= self.len as u64 {
            return self.insert_at_tail(book);
        }
        self.check_unique(&book)?;

        // 0 < index < len, so both the predecessor and its successor exist
        let mut before = self.head.ok_or_else(|| LibraryError::runtime("catalog head missing", None))?;
        for _ in 0..index - 1 {
            before = self.node(before).next
                .ok_or_else(|| LibraryError::runtime("catalog link broken", None))?;
        }
        let after = self.node(before).next;
        let ndx = self.alloc(book, Some(before), after);
        self.node_mut(before).next = Some(ndx);
        if let Some(after) = after {
            self.node_mut(after).prev = Some(ndx);
        }
        self.len += 1;
        Ok(())
    }

    pub fn find_by_key(&self, isbn: &str) -> Option<&BookEntity> {
        self.locate(isbn).map(|ndx| &self.node(ndx).book)
    }

    // zero-based position counted from the head
    pub fn position_of(&self, isbn: &str) -> Option<usize> {
        self.iter().position(|book| book.isbn == isbn)
    }

    pub fn find_by_author_or_category(&self, text: &str) -> Vec<BookEntity> {
        self.iter()
            .filter(|book| book.matches_author_or_category(text))
            .cloned()
            .collect()
    }

    pub fn list_all(&self) -> Vec<BookEntity> {
        self.iter().cloned().collect()
    }

    pub fn list_all_reversed(&self) -> Vec<BookEntity> {
        self.iter().rev().cloned().collect()
    }

    pub fn update_by_key(&mut self, isbn: &str, changes: &BookChanges) -> LibraryResult<&BookEntity> {
        let ndx = self.locate(isbn)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))?;
        let node = self.node_mut(ndx);
        changes.apply_to(&mut node.book);
        Ok(&node.book)
    }

    pub fn remove_by_key(&mut self, isbn: &str) -> LibraryResult<BookEntity> {
        let ndx = self.locate(isbn)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", isbn).as_str()))?;
        let node = self.slots[ndx].take()
            .ok_or_else(|| LibraryError::runtime("catalog slot already empty", None))?;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(ndx);
        self.len -= 1;
        Ok(node.book)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            catalog: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn check_unique(&self, book: &BookEntity) -> LibraryResult<()> {
        if self.contains_key(book.isbn.as_str()) {
            Err(LibraryError::duplicate_key(format!("isbn {} already exists", book.isbn).as_str()))
        } else {
            Ok(())
        }
    }

    fn locate(&self, isbn: &str) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(ndx) = cursor {
            let node = self.node(ndx);
            if node.book.isbn == isbn {
                return Some(ndx);
            }
            cursor = node.next;
        }
        None
    }

    fn alloc(&mut self, book: BookEntity, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node { book, prev, next };
        match self.free.pop() {
            Some(ndx) => {
                self.slots[ndx] = Some(node);
                ndx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    // linked indices always point at occupied slots
    fn node(&self, ndx: usize) -> &Node {
        match self.slots[ndx].as_ref() {
            Some(node) => node,
            None => unreachable!("catalog link to free slot {}", ndx),
        }
    }

    fn node_mut(&mut self, ndx: usize) -> &mut Node {
        match self.slots[ndx].as_mut() {
            Some(node) => node,
            None => unreachable!("catalog link to free slot {}", ndx),
        }
    }
}

/// Iter walks `next` links from the head and `prev` links from the tail.
pub(crate) struct Iter<'a> {
    catalog: &'a Catalog,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a BookEntity;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.catalog.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.book)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.catalog.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.book)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BookEntity;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookChanges;
    use crate::catalog::domain::model::Catalog;
    use crate::core::library::LibraryError;

    // fixtures never carry duplicate keys
    impl FromIterator<BookEntity> for Catalog {
        fn from_iter<I: IntoIterator<Item=BookEntity>>(iter: I) -> Self {
            let mut catalog = Catalog::new();
            for book in iter {
                catalog.insert_at_tail(book).expect("unique fixture key");
            }
            catalog
        }
    }

    fn dune() -> BookEntity {
        BookEntity::new("Dune", "Herbert", "1965", "0441013593", "SciFi")
    }

    fn orwell() -> BookEntity {
        BookEntity::new("1984", "Orwell", "1949", "0451524935", "Dystopia")
    }

    fn book(isbn: &str) -> BookEntity {
        BookEntity::new(format!("title {}", isbn).as_str(), "author", "2000", isbn, "category")
    }

    fn isbns(books: &[BookEntity]) -> Vec<String> {
        books.iter().map(|b| b.isbn.to_string()).collect()
    }

    // walks both directions and checks links and size agree
    fn assert_consistent(catalog: &Catalog) {
        let forward = catalog.list_all();
        let mut backward = catalog.list_all_reversed();
        backward.reverse();
        assert_eq!(forward, backward);
        assert_eq!(catalog.len(), forward.len());
        assert_eq!(catalog.head(), forward.first());
        assert_eq!(catalog.tail(), forward.last());
    }

    #[tokio::test]
    async fn test_should_list_dune_and_1984() {
        let mut catalog = Catalog::new();
        catalog.insert_at_tail(dune()).expect("should insert");
        catalog.insert_at_tail(orwell()).expect("should insert");

        assert_eq!(vec![dune(), orwell()], catalog.list_all());
        assert_eq!(vec![orwell(), dune()], catalog.list_all_reversed());
        assert_eq!(Some(&orwell()), catalog.find_by_key("0451524935"));

        let removed = catalog.remove_by_key("0441013593").expect("should remove");
        assert_eq!(dune(), removed);
        assert_eq!(vec![orwell()], catalog.list_all());
        assert_eq!(1, catalog.len());
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_start_empty() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(None, catalog.head());
        assert_eq!(None, catalog.tail());
        assert!(catalog.list_all().is_empty());
        assert!(catalog.list_all_reversed().is_empty());
        assert_eq!(None, catalog.find_by_key("1"));
    }

    #[tokio::test]
    async fn test_should_insert_at_head() {
        let mut catalog = Catalog::new();
        catalog.insert_at_head(book("1")).expect("should insert");
        catalog.insert_at_head(book("2")).expect("should insert");
        catalog.insert_at_head(book("3")).expect("should insert");
        assert_eq!(vec!["3", "2", "1"], isbns(&catalog.list_all()));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_insert_in_the_middle() {
        let mut catalog: Catalog = vec![book("1"), book("2"), book("3")].into_iter().collect();
        catalog.insert_at_position(book("x"), 1).expect("should insert");
        assert_eq!(vec!["1", "x", "2", "3"], isbns(&catalog.list_all()));
        catalog.insert_at_position(book("y"), 3).expect("should insert");
        assert_eq!(vec!["1", "x", "2", "y", "3"], isbns(&catalog.list_all()));
        assert_eq!(Some(3), catalog.position_of("y"));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_clamp_position_to_head() {
        let mut catalog: Catalog = vec![book("1"), book("2")].into_iter().collect();
        catalog.insert_at_position(book("a"), 0).expect("should insert");
        catalog.insert_at_position(book("b"), -5).expect("should insert");
        assert_eq!(vec!["b", "a", "1", "2"], isbns(&catalog.list_all()));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_clamp_position_to_tail() {
        let mut catalog: Catalog = vec![book("1"), book("2")].into_iter().collect();
        catalog.insert_at_position(book("a"), 2).expect("should insert");
        catalog.insert_at_position(book("b"), i64::MAX).expect("should insert");
        assert_eq!(vec!["1", "2", "a", "b"], isbns(&catalog.list_all()));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_insert_at_position_into_empty_catalog() {
        let mut catalog = Catalog::new();
        catalog.insert_at_position(book("1"), 3).expect("should insert");
        assert_eq!(vec!["1"], isbns(&catalog.list_all()));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let mut catalog = Catalog::new();
        catalog.insert_at_tail(dune()).expect("should insert");
        assert!(matches!(catalog.insert_at_tail(dune()), Err(LibraryError::DuplicateKey { .. })));
        assert!(matches!(catalog.insert_at_head(dune()), Err(LibraryError::DuplicateKey { .. })));
        assert!(matches!(catalog.insert_at_position(dune(), 1), Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, catalog.len());
    }

    #[tokio::test]
    async fn test_should_remove_head_middle_and_tail() {
        let mut catalog: Catalog = ["1", "2", "3", "4", "5"].iter().map(|i| book(i)).collect();
        catalog.remove_by_key("1").expect("should remove head");
        assert_consistent(&catalog);
        catalog.remove_by_key("5").expect("should remove tail");
        assert_consistent(&catalog);
        catalog.remove_by_key("3").expect("should remove middle");
        assert_consistent(&catalog);
        assert_eq!(vec!["2", "4"], isbns(&catalog.list_all()));
        catalog.remove_by_key("2").expect("should remove");
        catalog.remove_by_key("4").expect("should remove");
        assert!(catalog.is_empty());
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_remove_idempotently() {
        let mut catalog: Catalog = vec![dune(), orwell()].into_iter().collect();
        catalog.remove_by_key("0441013593").expect("should remove");
        assert!(matches!(catalog.remove_by_key("0441013593"), Err(LibraryError::NotFound { .. })));
        assert_eq!(1, catalog.len());
        assert!(matches!(catalog.remove_by_key("missing"), Err(LibraryError::NotFound { .. })));
        assert_eq!(1, catalog.len());
    }

    #[tokio::test]
    async fn test_should_reuse_freed_slots() {
        let mut catalog: Catalog = vec![book("1"), book("2"), book("3")].into_iter().collect();
        catalog.remove_by_key("2").expect("should remove");
        catalog.insert_at_head(book("4")).expect("should insert");
        catalog.insert_at_position(book("5"), 2).expect("should insert");
        assert_eq!(4, catalog.slots.len());
        assert!(catalog.free.is_empty());
        assert_eq!(vec!["4", "1", "5", "3"], isbns(&catalog.list_all()));
        assert_consistent(&catalog);
    }

    #[tokio::test]
    async fn test_should_update_without_changing_isbn() {
        let mut catalog: Catalog = vec![dune(), orwell()].into_iter().collect();
        let changes = BookChanges::new("Animal Farm", "George Orwell", "1945", "Satire");
        let updated = catalog.update_by_key("0451524935", &changes).expect("should update").clone();
        assert_eq!(BookEntity::new("Animal Farm", "George Orwell", "1945", "0451524935", "Satire"), updated);
        assert_eq!(Some(&updated), catalog.find_by_key("0451524935"));
        assert_eq!(Some(1), catalog.position_of("0451524935"));
        assert!(matches!(catalog.update_by_key("missing", &changes), Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_find_by_author_or_category() {
        let mut catalog: Catalog = vec![dune(), orwell()].into_iter().collect();
        catalog.insert_at_tail(BookEntity::new("Animal Farm", "orwell", "1945", "0451526341", "Satire"))
            .expect("should insert");
        assert_eq!(vec!["0451524935", "0451526341"], isbns(&catalog.find_by_author_or_category("ORWELL")));
        assert_eq!(vec!["0441013593"], isbns(&catalog.find_by_author_or_category("scifi")));
        assert!(catalog.find_by_author_or_category("Orw").is_empty());
    }

    #[tokio::test]
    async fn test_should_iterate_from_both_ends() {
        let catalog: Catalog = vec![book("1"), book("2"), book("3")].into_iter().collect();
        let mut iter = catalog.iter();
        assert_eq!(3, iter.len());
        assert_eq!("1", iter.next().map(|b| b.isbn.as_str()).unwrap_or_default());
        assert_eq!("3", iter.next_back().map(|b| b.isbn.as_str()).unwrap_or_default());
        assert_eq!("2", iter.next().map(|b| b.isbn.as_str()).unwrap_or_default());
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[tokio::test]
    async fn test_should_keep_invariants_over_mixed_operations() {
        let mut catalog = Catalog::new();
        let mut expected: Vec<String> = Vec::new();
        for i in 0..40i64 {
            let isbn = format!("{}", 1000 + i);
            match i % 4 {
                0 => {
                    catalog.insert_at_head(book(&isbn)).expect("should insert");
                    expected.insert(0, isbn);
                }
                1 => {
                    catalog.insert_at_tail(book(&isbn)).expect("should insert");
                    expected.push(isbn);
                }
                2 => {
                    let index = (i * 7) % (expected.len() as i64 + 2) - 1;
                    catalog.insert_at_position(book(&isbn), index).expect("should insert");
                    let clamped = index.clamp(0, expected.len() as i64) as usize;
                    expected.insert(clamped, isbn);
                }
                _ => {
                    let victim = expected.remove((i as usize) % expected.len());
                    catalog.remove_by_key(&victim).expect("should remove");
                }
            }
            assert_eq!(expected, isbns(&catalog.list_all()));
            assert_consistent(&catalog);
        }
    }

    #[tokio::test]
    async fn test_should_clear() {
        let mut catalog: Catalog = vec![dune(), orwell()].into_iter().collect();
        catalog.clear();
        assert!(catalog.is_empty());
        catalog.insert_at_tail(dune()).expect("should insert");
        assert_consistent(&catalog);
    }
}

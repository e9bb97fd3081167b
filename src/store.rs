use parking_lot::RwLock;

use crate::datamodel::{Author, Book, SEED_AUTHORS, SEED_BOOKS};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no {collection} id left after {len} records")]
    IdsExhausted {
        collection: &'static str,
        len: usize,
    },
}

/// Ids are assigned as `len + 1` and must fit a GraphQL `Int`.
fn next_id(collection: &'static str, len: usize) -> Result<i32, StoreError> {
    i32::try_from(len)
        .ok()
        .and_then(|len| len.checked_add(1))
        .ok_or(StoreError::IdsExhausted { collection, len })
}

#[derive(Default)]
struct Records {
    authors: Vec<Author>,
    books: Vec<Book>,
}

/// In-memory author and book collections.
///
/// Records are only ever appended. Every method takes the lock for a single
/// synchronous step and hands out clones, so no guard outlives a call.
#[derive(Default)]
pub struct Store {
    records: RwLock<Records>,
}

impl Store {
    pub fn seeded() -> Self {
        let records = Records {
            authors: SEED_AUTHORS.iter().map(Author::from).collect(),
            books: SEED_BOOKS.iter().map(Book::from).collect(),
        };
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn authors(&self) -> Vec<Author> {
        self.records.read().authors.clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.records.read().books.clone()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.records
            .read()
            .authors
            .iter()
            .find(|author| author.id == id)
            .cloned()
    }

    /// First book in insertion order matching `predicate`.
    pub fn find_book(&self, predicate: impl Fn(&Book) -> bool) -> Option<Book> {
        self.records.read().books.iter().find(|b| predicate(b)).cloned()
    }

    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.records
            .read()
            .books
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn add_author(&self, name: String) -> Result<Author, StoreError> {
        let mut records = self.records.write();
        let author = Author {
            id: next_id("author", records.authors.len())?,
            name,
        };
        records.authors.push(author.clone());
        Ok(author)
    }

    /// Appends a book that carries only its name and author reference.
    /// `author_id` is not checked against the author collection.
    pub fn add_book(&self, name: String, author_id: i32) -> Result<Book, StoreError> {
        let mut records = self.records.write();
        let book = Book {
            id: next_id("book", records.books.len())?,
            name,
            author_id,
            release_date: None,
            priority: None,
            author_name: None,
            kind: None,
        };
        records.books.push(book.clone());
        Ok(book)
    }
}

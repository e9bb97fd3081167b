#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// A stored book.
///
/// Only seeded books carry the descriptive fields; books appended at runtime
/// have just `id`, `name` and `author_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
    pub release_date: Option<String>,
    pub priority: Option<String>,
    /// Copied from the author at seed time and never synced afterwards.
    pub author_name: Option<String>,
    pub kind: Option<String>,
}

pub struct SeedAuthor {
    pub id: i32,
    pub name: &'static str,
}

pub struct SeedBook {
    pub id: i32,
    pub name: &'static str,
    pub author_id: i32,
    pub release_date: &'static str,
    pub priority: &'static str,
    pub author_name: &'static str,
    pub kind: &'static str,
}

impl From<&SeedAuthor> for Author {
    fn from(seed: &SeedAuthor) -> Self {
        Self {
            id: seed.id,
            name: seed.name.into(),
        }
    }
}

impl From<&SeedBook> for Book {
    fn from(seed: &SeedBook) -> Self {
        Self {
            id: seed.id,
            name: seed.name.into(),
            author_id: seed.author_id,
            release_date: Some(seed.release_date.into()),
            priority: Some(seed.priority.into()),
            author_name: Some(seed.author_name.into()),
            kind: Some(seed.kind.into()),
        }
    }
}

pub static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor {
        id: 1,
        name: "J. K. Rowling",
    },
    SeedAuthor {
        id: 2,
        name: "J. R. R. Tolkien",
    },
    SeedAuthor {
        id: 3,
        name: "Brent Weeks",
    },
];

pub static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: 1,
        name: "Harry Potter and the Chamber of Secrets",
        author_id: 1,
        release_date: "02/20/1989",
        priority: "Low",
        author_name: "J. K. Rowling",
        kind: "Horror",
    },
    SeedBook {
        id: 2,
        name: "Harry Potter and the Prisoner of Azkaban",
        author_id: 1,
        release_date: "10/10/1996",
        priority: "Medium",
        author_name: "J. K. Rowling",
        kind: "Crime",
    },
    SeedBook {
        id: 3,
        name: "Harry Potter and the Goblet of Fire",
        author_id: 1,
        release_date: "02/08/1988",
        priority: "High",
        author_name: "J. K. Rowling",
        kind: "Magic",
    },
    SeedBook {
        id: 4,
        name: "The Fellowship of the Ring",
        author_id: 2,
        release_date: "05/20/2021",
        priority: "Low",
        author_name: "J. R. R. Tolkien",
        kind: "Adventure",
    },
    SeedBook {
        id: 5,
        name: "The Two Towers",
        author_id: 2,
        release_date: "09/20/2014",
        priority: "High",
        author_name: "J. R. R. Tolkien",
        kind: "War",
    },
    SeedBook {
        id: 6,
        name: "The Return of the King",
        author_id: 2,
        release_date: "02/20/1989",
        priority: "Medium",
        author_name: "J. R. R. Tolkien",
        kind: "Adventure",
    },
    SeedBook {
        id: 7,
        name: "The Way of Shadows",
        author_id: 3,
        release_date: "05/10/1992",
        priority: "Low",
        author_name: "Brent Weeks",
        kind: "Horror",
    },
    SeedBook {
        id: 8,
        name: "Beyond the Shadows",
        author_id: 3,
        release_date: "09/28/1990",
        priority: "Medium",
        author_name: "Brent Weeks",
        kind: "Drama",
    },
];

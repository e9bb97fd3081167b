use async_graphql::{ComplexObject, Context, Object, Result, SimpleObject};

use crate::datamodel;

use super::context::StoreExt;

/// This represents a author of a book
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    id: i32,
    name: String,
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let books = ctx.store()?.books_by_author(self.id);
        Ok(books.into_iter().map(Book::from).collect())
    }
}

impl From<datamodel::Author> for Author {
    fn from(author: datamodel::Author) -> Self {
        Self {
            id: author.id,
            name: author.name,
        }
    }
}

/// This is a book from a list of books
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Book {
    id: i32,
    name: String,
    author_id: i32,
    release_date: Option<String>,
    priority: Option<String>,
    author_name: Option<String>,
    #[graphql(name = "type")]
    kind: Option<String>,
}

#[ComplexObject]
impl Book {
    /// `null` when no author has this book's `authorId`.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(ctx.store()?.author(self.author_id).map(Author::from))
    }
}

impl From<datamodel::Book> for Book {
    fn from(book: datamodel::Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author_id: book.author_id,
            release_date: book.release_date,
            priority: book.priority,
            author_name: book.author_name,
            kind: book.kind,
        }
    }
}

/// Exact-match lookup on a single optional book field. A missing argument
/// matches the first book that has no value for the field.
fn first_book_where(
    ctx: &Context<'_>,
    wanted: Option<String>,
    field: impl Fn(&datamodel::Book) -> Option<&str>,
) -> Result<Option<Book>> {
    let book = ctx
        .store()?
        .find_book(|book| field(book) == wanted.as_deref());
    Ok(book.map(Book::from))
}

pub struct QueryRoot;

/// Root Query
#[Object(name = "Query")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(ctx.store()?.find_book(|book| book.id == id).map(Book::from))
    }

    /// A single book
    async fn priority(&self, ctx: &Context<'_>, priority: Option<String>) -> Result<Option<Book>> {
        first_book_where(ctx, priority, |book| book.priority.as_deref())
    }

    /// A single book
    #[graphql(name = "type")]
    async fn book_by_type(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "type")] kind: Option<String>,
    ) -> Result<Option<Book>> {
        first_book_where(ctx, kind, |book| book.kind.as_deref())
    }

    /// A single book
    async fn release_date(
        &self,
        ctx: &Context<'_>,
        release_date: Option<String>,
    ) -> Result<Option<Book>> {
        first_book_where(ctx, release_date, |book| book.release_date.as_deref())
    }

    /// A single book
    async fn author_name(
        &self,
        ctx: &Context<'_>,
        author_name: Option<String>,
    ) -> Result<Option<Book>> {
        first_book_where(ctx, author_name, |book| book.author_name.as_deref())
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.store()?.books().into_iter().map(Book::from).collect())
    }

    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(ctx.store()?.author(id).map(Author::from))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(ctx.store()?.authors().into_iter().map(Author::from).collect())
    }
}

pub struct MutationRoot;

/// Root Mutation
#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add book
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        let book = ctx.store()?.add_book(name, author_id)?;
        tracing::info!(book_id = book.id, author_id, "added book");
        Ok(book.into())
    }

    /// Add author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let author = ctx.store()?.add_author(name)?;
        tracing::info!(author_id = author.id, name = %author.name, "added author");
        Ok(author.into())
    }
}

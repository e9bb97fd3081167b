use std::sync::Arc;

use cynic::{MutationBuilder as _, QueryBuilder as _};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW, ORIGIN};
use serde_json::{Value, json};

use crate::client::{
    AddAuthor, AddAuthorArguments, AddBook, AddBookArguments, AuthorSummary, BookByPriority,
    Catalogue, Client, Library, PriorityArguments,
};
use crate::store::Store;


use testserver::Server;

#[tokio::test]
async fn test_request() {
    let server = Server::start(Arc::new(Store::seeded())).await;
    let client = Client::new(server.graphql_url());

    let library = client.run(Library::build(())).await;
    let names: Vec<_> = library.authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["J. K. Rowling", "J. R. R. Tolkien", "Brent Weeks"]);
    assert_eq!(library.authors[1].books.len(), 3);

    let catalogue = client.run(Catalogue::build(())).await;
    assert_eq!(catalogue.books.len(), 8);
    let first = &catalogue.books[0];
    assert_eq!(first.release_date.as_deref(), Some("02/20/1989"));
    assert_eq!(first.kind.as_deref(), Some("Horror"));
    assert_eq!(
        first.author,
        Some(AuthorSummary {
            id: 1,
            name: "J. K. Rowling".into()
        })
    );
}

#[tokio::test]
async fn lookup_by_priority() {
    let server = Server::start(Arc::new(Store::seeded())).await;
    let client = Client::new(server.graphql_url());

    let op = BookByPriority::build(PriorityArguments {
        priority: Some("High".into()),
    });
    let book = client.run(op).await.priority.unwrap();
    assert_eq!(book.id, 3);
    assert_eq!(book.name, "Harry Potter and the Goblet of Fire");
}

#[tokio::test]
async fn mutations_append_to_the_shared_store() {
    let store = Arc::new(Store::seeded());
    let server = Server::start(store.clone()).await;
    let client = Client::new(server.graphql_url());

    let op = AddAuthor::build(AddAuthorArguments { name: "X".into() });
    let author = client.run(op).await.add_author;
    assert_eq!(
        author,
        AuthorSummary {
            id: 4,
            name: "X".into()
        }
    );

    let op = AddBook::build(AddBookArguments {
        name: "New Book".into(),
        author_id: 4,
    });
    let book = client.run(op).await.add_book;
    assert_eq!(book.id, 9);
    assert_eq!(book.release_date, None);
    assert_eq!(book.priority, None);
    assert_eq!(book.author_name, None);
    assert_eq!(book.kind, None);
    assert_eq!(book.author, Some(author));

    assert_eq!(store.authors().len(), 4);
    assert_eq!(store.books_by_author(4).len(), 1);
}

#[tokio::test]
async fn validation_errors_do_not_mutate() {
    let store = Arc::new(Store::seeded());
    let server = Server::start(store.clone()).await;

    let res = reqwest::Client::new()
        .post(server.graphql_url())
        .json(&json!({ "query": "mutation { addAuthor { id } }" }))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert_eq!(store.authors().len(), 3);
}

#[tokio::test]
async fn get_executes_queries() {
    let server = Server::start(Arc::new(Store::seeded())).await;

    let mut url = server.graphql_url();
    url.query_pairs_mut()
        .append_pair("query", "{ book(id: 7) { name } }");
    let res = reqwest::get(url).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["data"], json!({ "book": { "name": "The Way of Shadows" } }));
}

#[tokio::test]
async fn get_refuses_mutations() {
    let store = Arc::new(Store::seeded());
    let server = Server::start(store.clone()).await;

    let mut url = server.graphql_url();
    url.query_pairs_mut()
        .append_pair("query", r#"mutation { addAuthor(name: "X") { id } }"#);
    let res = reqwest::get(url).await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(res.headers()[ALLOW], "POST");
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body["errors"][0]["message"],
        "Can only perform a mutation operation from a POST request."
    );
    assert_eq!(store.authors().len(), 3);
}

#[tokio::test]
async fn get_without_query_serves_graphiql() {
    let server = Server::start(Arc::new(Store::seeded())).await;

    let res = reqwest::get(server.graphql_url()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page = res.text().await.unwrap();
    assert!(page.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn browser_get_with_query_serves_graphiql() {
    let store = Arc::new(Store::seeded());
    let server = Server::start(store.clone()).await;

    let mut url = server.graphql_url();
    url.query_pairs_mut()
        .append_pair("query", r#"mutation { addAuthor(name: "X") { id } }"#);
    let res = reqwest::Client::new()
        .get(url)
        .header(ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let page = res.text().await.unwrap();
    assert!(page.to_lowercase().contains("graphiql"));
    assert_eq!(store.authors().len(), 3);
}

#[tokio::test]
async fn any_origin_is_allowed() {
    let server = Server::start(Arc::new(Store::seeded())).await;

    let res = reqwest::Client::new()
        .post(server.graphql_url())
        .header(ORIGIN, "http://example.com")
        .json(&json!({ "query": "{ authors { id } }" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

use std::collections::HashSet;
use crate::books::domain::Book;

// Keyword is a search term after deciding whether it names a book id or text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Keyword<'a> {
    Id(i32),
    Text(&'a str),
}

impl<'a> Keyword<'a> {
    // A keyword that parses entirely as a signed 32-bit integer is an id; anything
    // else, including partial numbers and overflow, is text.
    pub fn classify(keyword: &'a str) -> Keyword<'a> {
        match keyword.parse::<i32>() {
            Ok(id) => Keyword::Id(id),
            Err(_) => Keyword::Text(keyword),
        }
    }
}

/// Returns the books matching `keyword`, or `None` when nothing matches.
///
/// An id keyword selects the first book with that id. A text keyword is matched as a
/// case-sensitive substring of the name, then the author, then the description; the
/// three passes are concatenated and repeated books are dropped keeping the first
/// occurrence.
pub fn search<B: Book + Clone>(books: &[B], keyword: &str) -> Option<Vec<B>> {
    let matched: Vec<&B> = match Keyword::classify(keyword) {
        Keyword::Id(id) => books.iter()
            .find(|b| b.book_id() == i64::from(id))
            .into_iter()
            .collect(),
        Keyword::Text(text) => books.iter().filter(|b| b.name().contains(text))
            .chain(books.iter().filter(|b| b.author().contains(text)))
            .chain(books.iter().filter(|b| b.description().contains(text)))
            .collect(),
    };
    let mut seen = HashSet::new();
    let res: Vec<B> = matched.into_iter()
        .filter(|b| seen.insert(b.book_id()))
        .cloned()
        .collect();
    if res.is_empty() {
        None
    } else {
        Some(res)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::domain::search::{Keyword, search};

    fn book(book_id: i64, name: &str, author: &str, description: &str) -> BookDto {
        BookDto { book_id, ..BookDto::new(name, author, "", description, 0) }
    }

    fn ids(books: &Option<Vec<BookDto>>) -> Vec<i64> {
        books.as_ref().map(|b| b.iter().map(|b| b.book_id).collect()).unwrap_or_default()
    }

    #[tokio::test]
    async fn test_should_classify_keywords() {
        assert_eq!(Keyword::Id(42), Keyword::classify("42"));
        assert_eq!(Keyword::Id(7), Keyword::classify("+7"));
        assert_eq!(Keyword::Id(-3), Keyword::classify("-3"));
        assert_eq!(Keyword::Id(7), Keyword::classify("007"));
        assert_eq!(Keyword::Text("42abc"), Keyword::classify("42abc"));
        assert_eq!(Keyword::Text("2147483648"), Keyword::classify("2147483648"));
        assert_eq!(Keyword::Id(i32::MIN), Keyword::classify("-2147483648"));
        assert_eq!(Keyword::Text(" 42"), Keyword::classify(" 42"));
        assert_eq!(Keyword::Text("-"), Keyword::classify("-"));
        assert_eq!(Keyword::Text(""), Keyword::classify(""));
        // only ASCII digits form an id
        assert_eq!(Keyword::Text("٤٢"), Keyword::classify("٤٢"));
    }

    #[tokio::test]
    async fn test_should_search_go_in_action() {
        let catalog = vec![book(42, "Go in Action", "Kennedy", "concurrency patterns")];
        assert_eq!(vec![42], ids(&search(&catalog, "42")));
        assert_eq!(vec![42], ids(&search(&catalog, "Kennedy")));
        assert_eq!(vec![42], ids(&search(&catalog, "concurrency")));
        assert_eq!(None, search(&catalog, "Rust"));
    }

    #[tokio::test]
    async fn test_should_return_each_match_once_in_catalog_order() {
        let catalog = vec![
            book(1, "Go Programming", "Donovan", "the Go book"),
            book(2, "Rust in Action", "McNamara", "systems"),
            book(3, "Learning Go", "Bodner", "idiomatic"),
        ];
        assert_eq!(vec![1, 3], ids(&search(&catalog, "Go")));
    }

    #[tokio::test]
    async fn test_should_order_by_name_then_author_then_description() {
        let catalog = vec![
            book(1, "A", "B", "needle in description"),
            book(2, "B", "needle author", "C"),
            book(3, "needle name", "D", "E"),
        ];
        assert_eq!(vec![3, 2, 1], ids(&search(&catalog, "needle")));
    }

    #[tokio::test]
    async fn test_should_match_case_sensitive() {
        let catalog = vec![book(1, "Go in Action", "Kennedy", "concurrency patterns")];
        assert_eq!(None, search(&catalog, "go in action"));
        assert_eq!(vec![1], ids(&search(&catalog, "in Act")));
    }

    #[tokio::test]
    async fn test_should_use_id_path_for_numbers() {
        let catalog = vec![
            book(7, "Seven", "a", "b"),
            book(42, "Hitchhiker 7", "c", "d"),
        ];
        // numeric keyword never falls back to text matching
        assert_eq!(vec![7], ids(&search(&catalog, "+7")));
        assert_eq!(None, search(&catalog, "-3"));
        assert_eq!(None, search(&catalog, "99"));
        assert_eq!(vec![42], ids(&search(&catalog, "Hitchhiker 7")));
    }

    #[tokio::test]
    async fn test_should_treat_partial_numbers_as_text() {
        let catalog = vec![
            book(42, "plain", "x", "y"),
            book(43, "Edition 42abc", "x", "y"),
        ];
        assert_eq!(vec![43], ids(&search(&catalog, "42abc")));
    }

    #[tokio::test]
    async fn test_should_match_everything_for_empty_keyword() {
        let catalog = vec![book(1, "a", "b", "c"), book(2, "", "", "")];
        assert_eq!(vec![1, 2], ids(&search(&catalog, "")));
    }

    #[tokio::test]
    async fn test_should_return_none_for_empty_catalog() {
        let catalog: Vec<BookDto> = vec![];
        assert_eq!(None, search(&catalog, "Go"));
        assert_eq!(None, search(&catalog, "42"));
    }

    #[tokio::test]
    async fn test_should_be_idempotent() {
        let catalog = vec![
            book(1, "Go Programming", "Donovan", "Go"),
            book(3, "Learning Go", "Go team", "idiomatic"),
        ];
        assert_eq!(search(&catalog, "Go"), search(&catalog, "Go"));
    }

    #[tokio::test]
    async fn test_should_keep_distinct_books_with_equal_fields() {
        let catalog = vec![book(1, "Twin", "Same", "Same"), book(2, "Twin", "Same", "Same")];
        assert_eq!(vec![1, 2], ids(&search(&catalog, "Twin")));
    }
}

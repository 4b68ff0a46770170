pub mod books_of_customer_cmd;
pub mod customers_of_book_cmd;
pub mod link_book_to_customer_cmd;
pub mod link_customer_to_book_cmd;

//! Ordered in-memory book storage

use crate::models::book::Book;

/// Books in insertion order
#[derive(Debug, Default)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    pub fn append(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Position of the book with the given id, if any
    pub fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    /// Replace the book at `position` in place
    pub fn replace(&mut self, position: usize, book: Book) {
        self.books[position] = book;
    }

    /// Remove the book at `position`, shifting later books down
    pub fn remove(&mut self, position: usize) -> Book {
        self.books.remove(position)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

//! Sample records served when the backend cannot be reached.

use once_cell::sync::Lazy;
use time::macros::datetime;

use crate::modules::books::models::Book;
use crate::modules::reading_lists::models::ReadingList;
use crate::modules::recommendations::models::Recommendation;
use crate::modules::reviews::models::Review;

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    genre: &str,
    rating: f32,
    published_year: i32,
    isbn: &str,
    description: &str,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        genre: genre.to_string(),
        rating,
        published_year,
        description: description.to_string(),
        cover_image: format!("https://covers.example.com/{}.jpg", id),
        isbn: isbn.to_string(),
    }
}

pub static BOOKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        book(
            "1",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Fiction",
            4.2,
            1925,
            "978-0743273565",
            "A portrait of the Jazz Age and the pursuit of the American dream.",
        ),
        book(
            "2",
            "To Kill a Mockingbird",
            "Harper Lee",
            "Fiction",
            4.5,
            1960,
            "978-0061120084",
            "A child's view of racial injustice in a small Southern town.",
        ),
        book(
            "3",
            "1984",
            "George Orwell",
            "Science Fiction",
            4.4,
            1949,
            "978-0451524935",
            "A totalitarian state watches every move of its citizens.",
        ),
        book(
            "4",
            "Pride and Prejudice",
            "Jane Austen",
            "Romance",
            4.3,
            1813,
            "978-0141439518",
            "Elizabeth Bennet and Mr. Darcy misjudge each other.",
        ),
        book(
            "5",
            "Dune",
            "Frank Herbert",
            "Science Fiction",
            4.6,
            1965,
            "978-0441172719",
            "A desert planet, a noble house and the spice that drives the empire.",
        ),
        book(
            "6",
            "Sapiens",
            "Yuval Noah Harari",
            "Non-Fiction",
            4.4,
            2011,
            "978-0062316097",
            "A brief history of humankind.",
        ),
    ]
});

pub static READING_LISTS: Lazy<Vec<ReadingList>> = Lazy::new(|| {
    vec![
        ReadingList {
            id: "rl-1".to_string(),
            user_id: "user-1".to_string(),
            name: "Summer Classics".to_string(),
            description: "Books to finish before September".to_string(),
            book_ids: vec!["1".to_string(), "2".to_string(), "4".to_string()],
            created_at: datetime!(2024-01-15 10:00 UTC),
            updated_at: datetime!(2024-02-01 18:30 UTC),
        },
        ReadingList {
            id: "rl-2".to_string(),
            user_id: "user-1".to_string(),
            name: "Sci-Fi Favorites".to_string(),
            description: "Worlds worth revisiting".to_string(),
            book_ids: vec!["3".to_string(), "5".to_string()],
            created_at: datetime!(2024-01-20 09:15 UTC),
            updated_at: datetime!(2024-01-20 09:15 UTC),
        },
        ReadingList {
            id: "rl-3".to_string(),
            user_id: "user-2".to_string(),
            name: "Book Club".to_string(),
            description: String::new(),
            book_ids: vec!["6".to_string()],
            created_at: datetime!(2024-03-03 12:00 UTC),
            updated_at: datetime!(2024-03-03 12:00 UTC),
        },
    ]
});

pub static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        Review {
            id: "rev-1".to_string(),
            book_id: "1".to_string(),
            user_id: "user-1".to_string(),
            rating: 5,
            comment: "Beautifully written.".to_string(),
            created_at: datetime!(2024-01-16 08:00 UTC),
        },
        Review {
            id: "rev-2".to_string(),
            book_id: "1".to_string(),
            user_id: "user-2".to_string(),
            rating: 4,
            comment: "Slow start, strong ending.".to_string(),
            created_at: datetime!(2024-01-18 21:45 UTC),
        },
        Review {
            id: "rev-3".to_string(),
            book_id: "5".to_string(),
            user_id: "user-2".to_string(),
            rating: 5,
            comment: "The best world-building I have read.".to_string(),
            created_at: datetime!(2024-02-10 14:20 UTC),
        },
    ]
});

pub static RECOMMENDATIONS: Lazy<Vec<Recommendation>> = Lazy::new(|| {
    vec![
        Recommendation {
            id: "rec-1".to_string(),
            book_id: "5".to_string(),
            reason: "Readers who enjoyed 1984 rate this highly".to_string(),
            confidence: 0.92,
        },
        Recommendation {
            id: "rec-2".to_string(),
            book_id: "6".to_string(),
            reason: "Popular in your favorite genres".to_string(),
            confidence: 0.85,
        },
        Recommendation {
            id: "rec-3".to_string(),
            book_id: "2".to_string(),
            reason: "A classic many of your lists are missing".to_string(),
            confidence: 0.78,
        },
    ]
});

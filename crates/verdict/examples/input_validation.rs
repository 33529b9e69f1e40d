//! Validate user input and pass failures forward as plain data.
//!
//! Run with: `cargo run --example input_validation`

use verdict::{assert_success_and_unwrap, exception, success, Outcome};

struct Post {
    author: String,
    title: String,
    content: String,
}

/// Return a meaningful message when something is invalid.
fn validate_post(post: &Post) -> Outcome<(), String> {
    if post.author.is_empty() {
        return exception("\"author\" missing".to_string());
    }
    if post.title.is_empty() {
        return exception("\"title\" missing".to_string());
    }
    if post.title.len() > 120 {
        return exception("\"title\" must be shorter than 120 characters".to_string());
    }
    if post.content.is_empty() {
        return exception("\"content\" missing".to_string());
    }
    success(())
}

fn save_post(post: &Post) -> Outcome<u64, String> {
    let validation = validate_post(post);
    if let Some(reason) = validation.exception_payload() {
        // pass the exception forward, no unwinding
        return exception(reason);
    }

    // saving the data once validation has passed
    let id = 1;
    success(id)
}

fn main() {
    let post = Post {
        author: "John Doe".to_string(),
        title: "Error handling should be easier".to_string(),
        content: "Lorem ipsum dolor, sit amet consectetur adipisicing elit.".to_string(),
    };

    let saved = save_post(&post);
    if saved.is_exception() {
        eprintln!("could not save post: {:?}", saved.exception_payload());
        return;
    }

    let id = assert_success_and_unwrap(saved);
    println!("new post saved: {id}");
}

//! Unrelated demo app: todo list, calculator, and quote endpoints
//!
//! Kept separate from the travel routes. The in-memory todo list and visit
//! counter live behind an explicit synchronization boundary (mutex and
//! atomic) so concurrent requests do not race.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Json};
use axum::routing::{get, post};
use chrono::{Local, Utc};
use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::VERSION;

const QUOTES: [&str; 10] = [
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Innovation distinguishes between a leader and a follower. - Steve Jobs",
    "Life is what happens to you while you're busy making other plans. - John Lennon",
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "It is during our darkest moments that we must focus to see the light. - Aristotle",
    "Success is not final, failure is not fatal: it is the courage to continue that counts. - Winston Churchill",
    "The way to get started is to quit talking and begin doing. - Walt Disney",
    "Don't let yesterday take up too much of today. - Will Rogers",
    "You learn more from failure than from success. Don't let it stop you. - Unknown",
    "If you are working on something that you really care about, you don't have to be pushed. - Steve Jobs",
];

#[derive(Debug, Clone, Serialize)]
pub struct TodoItem {
    pub text: String,
    pub timestamp: String,
}

/// Owned store for the demo app's mutable state.
#[derive(Debug, Default)]
pub struct DemoState {
    todos: Mutex<Vec<TodoItem>>,
    visits: AtomicU64,
}

pub fn router() -> Router {
    Router::new()
        .route("/demo", get(home))
        .route("/demo/add_todo", post(add_todo))
        .route("/demo/delete_todo/{index}", get(delete_todo))
        .route("/demo/calculate", post(calculate))
        .route("/api/status", get(api_status))
        .route("/api/random", get(api_random))
        .route("/api/quote", get(api_quote))
        .route("/api/todos", get(api_todos))
        .route("/health", get(health))
        .with_state(Arc::new(DemoState::default()))
}

fn hostname() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string())
}

fn random_quote() -> &'static str {
    QUOTES[rand::rng().random_range(0..QUOTES.len())]
}

fn render_home(state: &DemoState, result: Option<String>) -> Html<String> {
    let visits = state.visits.fetch_add(1, Ordering::Relaxed) + 1;

    let todos = state.todos.lock().expect("todo list lock poisoned");
    let todo_items = todos
        .iter()
        .enumerate()
        .map(|(index, todo)| {
            format!(
                "<div>✅ {} <small>(Added: {})</small> \
                 <a href=\"/demo/delete_todo/{index}\">❌</a></div>",
                todo.text, todo.timestamp
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let result_line = result
        .map(|result| format!("<p><strong>Result:</strong> {result}</p>"))
        .unwrap_or_default();

    Html(format!(
        "<!DOCTYPE html>\
<html><head><title>Interactive Demo App 🚀</title></head><body>\
<h1>🚀 Interactive Demo App</h1>\
<div><p><strong>🏠 Hostname:</strong> {hostname}</p>\
<p><strong>🕐 Current Time:</strong> {time}</p>\
<p><strong>👥 Total Visits:</strong> {visits}</p>\
<p><strong>📦 App Version:</strong> {version}</p></div>\
<div><h2>🎲 Random Quote</h2><p>{quote}</p></div>\
<div><h2>📝 Todo List</h2>\
<form method=\"post\" action=\"/demo/add_todo\">\
<input type=\"text\" name=\"todo\" placeholder=\"Enter a new todo...\" required>\
<button type=\"submit\">Add Todo</button></form>\
{todo_items}</div>\
<div><h2>🧮 Simple Calculator</h2>\
<form method=\"post\" action=\"/demo/calculate\">\
<input type=\"number\" name=\"num1\" required>\
<select name=\"operation\">\
<option value=\"+\">+</option><option value=\"-\">-</option>\
<option value=\"*\">×</option><option value=\"/\">÷</option>\
</select>\
<input type=\"number\" name=\"num2\" required>\
<button type=\"submit\">Calculate</button></form>\
{result_line}</div>\
<div><h2>🔗 API Endpoints</h2><ul>\
<li><a href=\"/api/status\">/api/status</a></li>\
<li><a href=\"/api/random\">/api/random</a></li>\
<li><a href=\"/api/todos\">/api/todos</a></li>\
<li><a href=\"/health\">/health</a></li>\
</ul></div>\
</body></html>",
        hostname = hostname(),
        time = Local::now().format("%Y-%m-%d %H:%M:%S"),
        version = VERSION,
        quote = random_quote(),
    ))
}

async fn home(State(state): State<Arc<DemoState>>) -> Html<String> {
    render_home(&state, None)
}

#[derive(Debug, Deserialize)]
struct AddTodoForm {
    todo: String,
}

async fn add_todo(
    State(state): State<Arc<DemoState>>,
    Form(form): Form<AddTodoForm>,
) -> Html<String> {
    if !form.todo.is_empty() {
        state
            .todos
            .lock()
            .expect("todo list lock poisoned")
            .push(TodoItem {
                text: form.todo,
                timestamp: Local::now().format("%H:%M:%S").to_string(),
            });
    }
    render_home(&state, None)
}

async fn delete_todo(
    State(state): State<Arc<DemoState>>,
    Path(index): Path<usize>,
) -> Html<String> {
    {
        let mut todos = state.todos.lock().expect("todo list lock poisoned");
        if index < todos.len() {
            todos.remove(index);
        }
    }
    render_home(&state, None)
}

#[derive(Debug, Deserialize)]
struct CalculateForm {
    num1: String,
    num2: String,
    operation: String,
}

/// Apply the calculator operation. Malformed input renders as an inline
/// error message, never as a failed response.
fn evaluate(form: &CalculateForm) -> String {
    let (Ok(num1), Ok(num2)) = (form.num1.parse::<f64>(), form.num2.parse::<f64>()) else {
        return "Error: Invalid numbers!".to_string();
    };

    match form.operation.as_str() {
        "+" => (num1 + num2).to_string(),
        "-" => (num1 - num2).to_string(),
        "*" => (num1 * num2).to_string(),
        "/" => {
            if num2 == 0.0 {
                "Error: Division by zero!".to_string()
            } else {
                (num1 / num2).to_string()
            }
        }
        _ => "Error: Invalid operation!".to_string(),
    }
}

async fn calculate(
    State(state): State<Arc<DemoState>>,
    Form(form): Form<CalculateForm>,
) -> Html<String> {
    render_home(&state, Some(evaluate(&form)))
}

async fn api_status(State(state): State<Arc<DemoState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Demo app is running successfully",
        "hostname": hostname(),
        "timestamp": Utc::now().to_rfc3339(),
        "visits": state.visits.load(Ordering::Relaxed),
    }))
}

async fn api_random() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "random_number": rand::rng().random_range(1..=1000),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn api_quote() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "quote": random_quote(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn api_todos(State(state): State<Arc<DemoState>>) -> Json<serde_json::Value> {
    let todos = state.todos.lock().expect("todo list lock poisoned");
    Json(serde_json::json!({
        "todos": &*todos,
        "count": todos.len(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Demo app is running successfully",
        "hostname": hostname(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn calc(num1: &str, num2: &str, operation: &str) -> String {
        evaluate(&CalculateForm {
            num1: num1.into(),
            num2: num2.into(),
            operation: operation.into(),
        })
    }

    #[rstest]
    #[case("2", "3", "+", "5")]
    #[case("2", "3", "-", "-1")]
    #[case("2", "3", "*", "6")]
    #[case("6", "3", "/", "2")]
    fn test_calculator_operations(
        #[case] num1: &str,
        #[case] num2: &str,
        #[case] operation: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(calc(num1, num2, operation), expected);
    }

    #[test]
    fn test_division_by_zero_is_inline_error() {
        assert_eq!(calc("1", "0", "/"), "Error: Division by zero!");
    }

    #[test]
    fn test_malformed_numbers_are_inline_error() {
        assert_eq!(calc("abc", "1", "+"), "Error: Invalid numbers!");
        assert_eq!(calc("1", "", "+"), "Error: Invalid numbers!");
    }

    #[test]
    fn test_unknown_operation_is_inline_error() {
        assert_eq!(calc("1", "2", "%"), "Error: Invalid operation!");
    }

    #[test]
    fn test_todo_list_add_and_delete() {
        let state = DemoState::default();
        state.todos.lock().unwrap().push(TodoItem {
            text: "first".into(),
            timestamp: "12:00:00".into(),
        });
        state.todos.lock().unwrap().push(TodoItem {
            text: "second".into(),
            timestamp: "12:00:01".into(),
        });

        {
            let mut todos = state.todos.lock().unwrap();
            todos.remove(0);
        }

        let todos = state.todos.lock().unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].text, "second");
    }

    #[test]
    fn test_visit_counter_increments() {
        let state = DemoState::default();
        render_home(&state, None);
        render_home(&state, None);
        assert_eq!(state.visits.load(Ordering::Relaxed), 2);
    }
}

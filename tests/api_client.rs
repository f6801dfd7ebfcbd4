//! WebhookClient against a throwaway loopback server

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use cuentas_claras::api::{ExpenseBackend, WebhookClient};
use cuentas_claras::models::{Category, ExpenseId, NewExpense, Payer};
use cuentas_claras::ClarasError;

/// A request as seen by the fake server
struct Captured {
    request_line: String,
    body: String,
}

/// Serve exactly one request with a canned status and body
fn serve_once(status: &str, body: &str) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            if header.trim().is_empty() {
                break;
            }
            let lower = header.to_lowercase();
            if let Some(value) = lower.strip_prefix("content-length:") {
                content_length = value.trim().parse().unwrap();
            }
        }

        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();

        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let _ = sender.send(Captured {
            request_line: request_line.trim().to_string(),
            body: String::from_utf8(body).unwrap(),
        });
    });

    (base_url, receiver)
}

#[test]
fn fetch_stats_parses_snapshot() {
    let body = r#"{
        "total_budget": 1000,
        "total_spent": 250,
        "remaining": 750,
        "percentage": 25,
        "status": "VERDE",
        "message": "Todo bien",
        "transactions": [{"id": 7, "concepto": "Pan", "cantidad": "x", "pagador": "Rosa", "categoria": "Super", "fecha": "2024-01-03"}]
    }"#;
    let (base_url, captured) = serve_once("200 OK", body);

    let client = WebhookClient::new(base_url, None).unwrap();
    let snapshot = client.fetch_stats().unwrap();

    assert_eq!(snapshot.total_budget, Some(1000.0));
    assert_eq!(snapshot.message, "Todo bien");
    assert_eq!(snapshot.transactions.len(), 1);
    assert_eq!(snapshot.transactions[0].id, ExpenseId::from(7));
    assert_eq!(snapshot.transactions[0].amount, None);

    let request = captured.recv().unwrap();
    assert_eq!(request.request_line, "GET /webhook/equity-hub-stats HTTP/1.1");
}

#[test]
fn fetch_stats_rejects_non_object_body() {
    let (base_url, _captured) = serve_once("200 OK", "[1, 2]");
    let client = WebhookClient::new(base_url, None).unwrap();

    let err = client.fetch_stats().unwrap_err();
    assert!(matches!(err, ClarasError::Json(_)));
}

#[test]
fn submit_posts_english_field_names() {
    let (base_url, captured) = serve_once("200 OK", "");
    let client = WebhookClient::new(base_url, None).unwrap();

    client
        .submit_expense(&NewExpense {
            payer: Payer::Rosa,
            amount: 12.5,
            concept: "Pienso".into(),
            category: Category::Mascota,
        })
        .unwrap();

    let request = captured.recv().unwrap();
    assert_eq!(request.request_line, "POST /webhook/equity-hub-ingest HTTP/1.1");
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({"payer": "Rosa", "amount": 12.5, "concept": "Pienso", "category": "Mascota"})
    );
}

#[test]
fn delete_sends_id_and_reports_status() {
    let (base_url, captured) = serve_once("500 Internal Server Error", "{}");
    let client = WebhookClient::new(base_url, None).unwrap();

    let err = client.delete_expense(&ExpenseId::from(42)).unwrap_err();
    assert_eq!(
        err,
        ClarasError::Status {
            operation: "Delete expense",
            status: 500
        }
    );

    let request = captured.recv().unwrap();
    assert_eq!(request.request_line, "DELETE /webhook/delete-expense HTTP/1.1");
    assert_eq!(request.body, r#"{"id":42}"#);
}

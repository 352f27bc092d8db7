//! Shared fixtures for the SerpApi mock tests.
#![allow(dead_code)]

use rustscholar::config::Config;
use rustscholar::serpapi::SerpApiClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

pub const SEARCH_PATH: &str = "/search.json";

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> SerpApiClient {
    client_with_timeout(server, Duration::from_secs(5))
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> SerpApiClient {
    let config = Config::new(Some("test-key".to_string()))
        .expect("valid key")
        .with_base_url(format!("{}{}", server.uri(), SEARCH_PATH))
        .with_timeout(timeout);
    SerpApiClient::new(config).expect("client builds")
}

/// `google_scholar_author` response with `n` well-formed articles.
pub fn author_json(name: &str, n: usize) -> Value {
    let titles = [
        "Deep Residual Learning for Image Recognition",
        "Attention Is All You Need",
        "Generative Adversarial Networks",
        "Graph Convolutional Networks for Semi-Supervised Classification",
        "Dropout: A Simple Way to Prevent Neural Networks from Overfitting",
        "Batch Normalization: Accelerating Deep Network Training",
        "Sequence to Sequence Learning with Neural Networks",
    ];

    let articles: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "title": titles[i % titles.len()],
                "link": format!("https://scholar.google.com/citations?view_op=view_citation&c={}", i),
                "authors": "K He, X Zhang, S Ren, J Sun",
                "publication": "Proceedings of CVPR, 770-778",
                "year": "2016",
                "snippet": "A residual learning framework.",
                "cited_by": { "value": 1000 - i as i64 }
            })
        })
        .collect();

    json!({
        "search_metadata": { "id": "abc", "status": "Success" },
        "search_parameters": { "engine": "google_scholar_author" },
        "author": { "name": name, "affiliations": "Example University" },
        "cited_by": { "table": [
            { "citations": { "all": 250000, "since_2019": 180000 } },
            { "h_index": { "all": 70, "since_2019": 60 } },
            { "i10_index": { "all": 150, "since_2019": 120 } }
        ]},
        "articles": articles
    })
}

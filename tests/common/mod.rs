#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// One request as the stand-in venue server saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body_len: usize,
}

struct Reply {
    status: u16,
    content_type: &'static str,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

pub struct VenueServer {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    handle: ServerHandle,
}

impl VenueServer {
    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("seen lock").clone()
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

async fn record(req: HttpRequest, body: web::Bytes, reply: web::Data<Reply>) -> HttpResponse {
    reply.seen.lock().expect("seen lock").push(SeenRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body_len: body.len(),
    });
    HttpResponse::build(StatusCode::from_u16(reply.status).expect("valid status"))
        .content_type(reply.content_type)
        .body(reply.body.clone())
}

/// Serve `body` with `status` for every request, recording what arrives.
pub async fn serve(status: u16, content_type: &'static str, body: &str) -> VenueServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let reply = web::Data::new(Reply {
        status,
        content_type,
        body: body.to_string(),
        seen: seen.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(reply.clone())
            .default_service(web::to(record))
    })
    .workers(1)
    .listen(listener)
    .expect("listen")
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    VenueServer {
        base_url: format!("http://127.0.0.1:{port}"),
        seen,
        handle,
    }
}

pub async fn serve_json(status: u16, body: &str) -> VenueServer {
    serve(status, "application/json", body).await
}

/// A base url nothing is listening on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

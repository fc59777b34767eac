use actix_web::{dev::Server, web, App, HttpResponse, HttpServer};
use serde_json::Value;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

type Received = Arc<Mutex<Vec<Value>>>;

/// Local endpoint that records every reminder it receives.
/// Requests to `/fail` are answered with a server error.
pub struct WebhookSink {
    pub address: String,
    received: Received,
}

impl WebhookSink {
    pub fn url(&self) -> String {
        format!("{}/hook", self.address)
    }

    pub fn failing_url(&self) -> String {
        format!("{}/fail", self.address)
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn receive(body: web::Json<Value>, received: web::Data<Received>) -> HttpResponse {
    received.lock().unwrap().push(body.0);
    HttpResponse::Ok().finish()
}

async fn fail() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

pub fn spawn_webhook_sink() -> WebhookSink {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind webhook sink");
    let port = listener.local_addr().unwrap().port();
    let received: Received = Default::default();

    let data = received.clone();
    let server: Server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(data.clone()))
            .route("/hook", web::post().to(receive))
            .route("/fail", web::post().to(fail))
    })
    .listen(listener)
    .expect("Failed to listen for webhooks")
    .workers(1)
    .run();
    let _ = actix_web::rt::spawn(server);

    WebhookSink {
        address: format!("http://127.0.0.1:{}", port),
        received,
    }
}

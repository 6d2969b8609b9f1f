use crate::config::Config;
use crate::dto::*;
use crate::pipeline::Pipeline;
use crate::pipeline::Reject;
use crate::store::Memory;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::web;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use std::sync::Arc;

pub struct Server;

impl Server {
    pub async fn run() -> Result<(), std::io::Error> {
        let pipeline = web::Data::new(Pipeline::new(
            Arc::new(Memory::default()),
            Config::from_env(),
        ));
        log::info!("starting game server");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(pipeline.clone())
                .route("/new-game", web::post().to(new_game))
                .route("/join-game", web::post().to(join_game))
                .route("/action", web::post().to(action))
                .route("/poll", web::post().to(poll))
                .route("/list-games", web::get().to(list_games))
        })
        .workers(4)
        .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
        .run()
        .await
    }
}

fn refuse(reject: Reject) -> HttpResponse {
    match reject.is_fault() {
        true => HttpResponse::InternalServerError().json(reject.to_string()),
        false => HttpResponse::BadRequest().json(reject.to_string()),
    }
}

async fn new_game(pipeline: web::Data<Pipeline>, body: web::Json<SeatRequest>) -> impl Responder {
    match pipeline.create(&body.game_id, &body.user).await {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(reject) => refuse(reject),
    }
}

async fn join_game(pipeline: web::Data<Pipeline>, body: web::Json<SeatRequest>) -> impl Responder {
    match pipeline.join(&body.game_id, &body.user).await {
        Ok(()) => HttpResponse::Ok().json("Joined game"),
        Err(reject) => refuse(reject),
    }
}

async fn action(pipeline: web::Data<Pipeline>, body: web::Json<ActionRequest>) -> impl Responder {
    match pipeline.act(&body).await {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(reject) => refuse(reject),
    }
}

async fn poll(pipeline: web::Data<Pipeline>, body: web::Json<PollRequest>) -> impl Responder {
    match pipeline.poll(&body.game_id, body.version).await {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(reject) => refuse(reject),
    }
}

async fn list_games(
    pipeline: web::Data<Pipeline>,
    query: web::Query<ListGamesQuery>,
) -> impl Responder {
    let games = pipeline.list(&query).await;
    HttpResponse::Ok().json(GameList { games })
}

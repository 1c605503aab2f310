use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ErrorCode;
use crate::registry::SessionId;
use crate::state::app_state::AppState;
use crate::ws::hub::Outbound;
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(conn_id, app_state);
    ws::start(session, &req, stream)
}

/// One actor per connected client. Parses frames, forwards intents to the
/// game flow service, and writes outbound messages; the per-session critical
/// section lives in the service/registry, not here.
pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,

    /// Session this connection joined, if any. One join per connection.
    game_id: Option<SessionId>,

    last_heartbeat: Instant,
}

impl WsSession {
    fn new(conn_id: Uuid, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id,
            app_state,
            game_id: None,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error(
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        Self::send_json(
            ctx,
            &ServerMsg::Error {
                code,
                message: message.into(),
            },
        );
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    fn handle_client_msg(&mut self, cmd: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        match cmd {
            ClientMsg::JoinGame => {
                if self.game_id.is_some() {
                    Self::send_error(ctx, ErrorCode::BadRequest, "Already joined a game");
                    return;
                }

                let outcome = self.app_state.flow().join(self.conn_id);
                self.game_id = Some(outcome.game_id);
                self.app_state.hub().subscribe(outcome.game_id, self.conn_id);

                // Ordering guarantee: the joiner's ack precedes the start
                // broadcast it may have triggered.
                Self::send_json(
                    ctx,
                    &ServerMsg::GameJoined {
                        game_id: outcome.game_id,
                        player_index: outcome.player_index,
                        letter: outcome.letter,
                    },
                );
                if let Some(current_turn) = outcome.start {
                    self.app_state
                        .hub()
                        .broadcast(outcome.game_id, ServerMsg::GameStart { current_turn });
                }
            }

            ClientMsg::PlaceUnits { game_id, units } => {
                match self
                    .app_state
                    .flow()
                    .place_units(self.conn_id, game_id, &units)
                {
                    Ok(outcome) => {
                        if let Some(grid) = outcome.grid {
                            self.app_state
                                .hub()
                                .broadcast(game_id, ServerMsg::UnitsPlaced { grid });
                        }
                    }
                    Err(err) => Self::send_error(ctx, ErrorCode::from(&err), err.to_string()),
                }
            }

            ClientMsg::Move {
                game_id,
                unit,
                direction,
            } => {
                match self
                    .app_state
                    .flow()
                    .make_move(self.conn_id, game_id, &unit, direction)
                {
                    Ok(applied) => {
                        let hub = self.app_state.hub();
                        if let Some(winner) = applied.winner {
                            hub.broadcast(game_id, ServerMsg::GameOver { winner });
                        } else if let Some(current_turn) = applied.current_turn {
                            hub.broadcast(
                                game_id,
                                ServerMsg::GameUpdate {
                                    grid: applied.grid,
                                    current_turn,
                                },
                            );
                        }
                    }
                    Err(err) => Self::send_json(
                        ctx,
                        &ServerMsg::MoveRejected {
                            code: ErrorCode::from(&err),
                            message: err.to_string(),
                        },
                    ),
                }
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        let recipient = ctx.address().recipient::<Outbound>();
        self.app_state.hub().register(self.conn_id, recipient);
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.app_state.hub().unregister(self.conn_id);
        if let Some(left) = self.app_state.flow().leave(self.conn_id) {
            if left.abandoned {
                self.app_state
                    .hub()
                    .send_to_each(&left.remaining, ServerMsg::OpponentLeft);
            }
        }
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                // A malformed frame rejects only itself; the connection (and
                // any session it sits in) stays up.
                match serde_json::from_str::<ClientMsg>(&text) {
                    Ok(cmd) => self.handle_client_msg(cmd, ctx),
                    Err(_) => Self::send_error(ctx, ErrorCode::BadRequest, "Malformed JSON"),
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                Self::send_error(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Outbound> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Outbound, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}

use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

use crate::registry::SessionId;
use crate::ws::protocol::ServerMsg;

/// Outbound wire message, delivered to a session actor for serialization.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Outbound(pub ServerMsg);

/// Connection fan-out: maps live connections to their actor mailboxes and
/// game sessions to the connections subscribed to them.
///
/// Single-process: a session's participants are always on this hub, so
/// broadcast is a direct mailbox send.
#[derive(Default)]
pub struct WsHub {
    connections: DashMap<Uuid, Recipient<Outbound>>,
    games: DashMap<SessionId, Vec<Uuid>>,
}

impl WsHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, conn: Uuid, recipient: Recipient<Outbound>) {
        self.connections.insert(conn, recipient);
    }

    pub fn unregister(&self, conn: Uuid) {
        self.connections.remove(&conn);
        self.games.retain(|_, conns| {
            conns.retain(|c| *c != conn);
            !conns.is_empty()
        });
    }

    pub fn subscribe(&self, game_id: SessionId, conn: Uuid) {
        let mut conns = self.games.entry(game_id).or_default();
        if !conns.contains(&conn) {
            conns.push(conn);
        }
    }

    pub fn send_to(&self, conn: Uuid, msg: ServerMsg) {
        if let Some(recipient) = self.connections.get(&conn) {
            recipient.do_send(Outbound(msg));
        }
    }

    /// Sends to every connection subscribed to the session.
    pub fn broadcast(&self, game_id: SessionId, msg: ServerMsg) {
        if let Some(conns) = self.games.get(&game_id) {
            for conn in conns.iter() {
                if let Some(recipient) = self.connections.get(conn) {
                    recipient.do_send(Outbound(msg.clone()));
                }
            }
        }
    }

    /// Sends to an explicit connection list (survivors of a disconnect).
    pub fn send_to_each(&self, conns: &[Uuid], msg: ServerMsg) {
        for conn in conns {
            self.send_to(*conn, msg.clone());
        }
    }
}

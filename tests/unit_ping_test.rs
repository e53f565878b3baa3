use bytes::Bytes;
use slistdb::core::RespValue;
use slistdb::core::SlistDBError;
use slistdb::core::commands::command_trait::{ExecutableCommand, ParseCommand};
use slistdb::core::commands::generic::Ping;
use slistdb::core::events::NotificationBus;
use slistdb::core::protocol::RespFrame;
use slistdb::core::storage::db::{Entries, ExecutionContext};

#[tokio::test]
async fn test_ping_replies_pong() {
    let mut entries = Entries::new();
    let bus = NotificationBus::default();
    let mut ctx = ExecutionContext {
        entries: &mut entries,
        notifications: &bus,
    };

    let ping = Ping::parse(&[]).unwrap();
    let (resp, _) = ping.execute(&mut ctx).await.unwrap();
    assert_eq!(resp, RespValue::SimpleString("PONG".to_string()));
}

#[tokio::test]
async fn test_ping_echoes_message() {
    let mut entries = Entries::new();
    let bus = NotificationBus::default();
    let mut ctx = ExecutionContext {
        entries: &mut entries,
        notifications: &bus,
    };

    let ping = Ping::parse(&[RespFrame::BulkString(Bytes::from_static(b"hello"))]).unwrap();
    let (resp, _) = ping.execute(&mut ctx).await.unwrap();
    assert_eq!(resp, RespValue::BulkString(Bytes::from_static(b"hello")));
}

#[tokio::test]
async fn test_ping_rejects_extra_args() {
    let args = [
        RespFrame::BulkString(Bytes::from_static(b"a")),
        RespFrame::BulkString(Bytes::from_static(b"b")),
    ];
    assert!(matches!(
        Ping::parse(&args).unwrap_err(),
        SlistDBError::WrongArgumentCount(_)
    ));
}

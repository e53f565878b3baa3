use bytes::Bytes;
use slistdb::core::RespValue;
use slistdb::core::SlistDBError;
use slistdb::core::commands::command_trait::{ExecutableCommand, ParseCommand};
use slistdb::core::commands::slist::SlAdd;
use slistdb::core::commands::string::{Get, Set};
use slistdb::core::events::NotificationBus;
use slistdb::core::protocol::RespFrame;
use slistdb::core::storage::db::{Entries, ExecutionContext};

fn bs(s: &'static [u8]) -> RespFrame {
    RespFrame::BulkString(Bytes::from_static(s))
}

#[tokio::test]
async fn test_set_then_get_roundtrip() {
    let mut entries = Entries::new();
    let bus = NotificationBus::default();
    let mut ctx = ExecutionContext {
        entries: &mut entries,
        notifications: &bus,
    };

    let set = Set::parse(&[bs(b"k"), bs(b"value")]).unwrap();
    let (resp, _) = set.execute(&mut ctx).await.unwrap();
    assert_eq!(resp, RespValue::SimpleString("OK".to_string()));

    let get = Get::parse(&[bs(b"k")]).unwrap();
    let (resp, _) = get.execute(&mut ctx).await.unwrap();
    assert_eq!(resp, RespValue::BulkString(Bytes::from_static(b"value")));
}

#[tokio::test]
async fn test_get_missing_key_is_null() {
    let mut entries = Entries::new();
    let bus = NotificationBus::default();
    let mut ctx = ExecutionContext {
        entries: &mut entries,
        notifications: &bus,
    };

    let get = Get::parse(&[bs(b"absent")]).unwrap();
    let (resp, _) = get.execute(&mut ctx).await.unwrap();
    assert_eq!(resp, RespValue::Null);
}

#[tokio::test]
async fn test_get_on_sorted_list_is_wrong_type() {
    let mut entries = Entries::new();
    let bus = NotificationBus::default();
    let mut ctx = ExecutionContext {
        entries: &mut entries,
        notifications: &bus,
    };

    let add = SlAdd::parse(&[bs(b"k"), bs(b"s"), bs(b"m")]).unwrap();
    add.execute(&mut ctx).await.unwrap();

    let get = Get::parse(&[bs(b"k")]).unwrap();
    let err = get.execute(&mut ctx).await.unwrap_err();
    assert!(matches!(err, SlistDBError::WrongType));
}

#[tokio::test]
async fn test_parse_arity() {
    assert!(matches!(
        Get::parse(&[]).unwrap_err(),
        SlistDBError::WrongArgumentCount(_)
    ));
    assert!(matches!(
        Set::parse(&[bs(b"k")]).unwrap_err(),
        SlistDBError::WrongArgumentCount(_)
    ));
}

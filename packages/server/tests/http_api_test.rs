//! End-to-end tests for the read-only HTTP API.

mod common;

use common::TestServer;
use kaiwa_server::infrastructure::dto::{
    http::{RoomDetailDto, RoomSummaryDto},
    websocket::{ClientMessage, ServerMessage},
};
use reqwest::StatusCode;

#[tokio::test]
async fn test_health_check() {
    // テスト項目: ヘルスチェックが ok を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = reqwest::get(server.http_url("/api/health")).await.unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn test_get_rooms_reflects_membership() {
    // テスト項目: ルーム一覧に作成順のルームと参加者数が反映される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut alice = server.client_in_room("alice", "General").await;
    alice
        .send(&ClientMessage::CreateRoom {
            room: "Devs".to_string(),
        })
        .await;
    alice
        .recv_until(|m| matches!(m, ServerMessage::Rooms { .. }))
        .await;

    // when (操作):
    let rooms: Vec<RoomSummaryDto> = reqwest::get(server.http_url("/api/rooms"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(
        rooms,
        vec![
            RoomSummaryDto {
                name: "General".to_string(),
                users: 1,
            },
            RoomSummaryDto {
                name: "Devs".to_string(),
                users: 0,
            },
        ]
    );
}

#[tokio::test]
async fn test_get_room_detail() {
    // テスト項目: ルーム詳細に参加者（ソート済み）とメッセージ数が含まれる
    // given (前提条件):
    let server = TestServer::start().await;
    let mut carol = server.client_in_room("carol", "General").await;
    let _alice = server.client_in_room("alice", "General").await;
    carol.send_text("hi").await;
    carol
        .recv_until(|m| matches!(m, ServerMessage::Message { .. }))
        .await;

    // when (操作):
    let detail: RoomDetailDto = reqwest::get(server.http_url("/api/rooms/General"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(
        detail,
        RoomDetailDto {
            name: "General".to_string(),
            members: vec!["alice".to_string(), "carol".to_string()],
            message_count: 1,
        }
    );
}

#[tokio::test]
async fn test_get_room_detail_not_found() {
    // テスト項目: 存在しないルームの詳細は 404 を返す
    // given (前提条件):
    let server = TestServer::start().await;

    // when (操作):
    let response = reqwest::get(server.http_url("/api/rooms/Nowhere"))
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

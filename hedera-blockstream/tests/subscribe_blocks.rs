use std::net::{Ipv4Addr, SocketAddrV4};
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hedera_blockstream::BlockStreamClient;
use hedera_codec::Writer;
use hedera_transport::Transport;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

fn data_frame(payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8];
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

fn http_response(body: &[u8]) -> Vec<u8> {
    let mut response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/grpc-web+proto\r\ncontent-length: {}\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);
    response
}

async fn accept_one_request(listener: &TcpListener) -> tokio::net::TcpStream {
    let (mut socket, _) = listener.accept().await.unwrap();

    let mut buf = Vec::new();
    let mut chunk = [0u8; 512];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || n == 0 {
            break;
        }
    }

    socket
}

fn one_item_block(block_number: u64) -> Vec<u8> {
    let mut header = Writer::new();
    header.write_uint_field(1, block_number);

    let mut header_item = Writer::new();
    header_item.write_message_field(1, header);

    let mut block = Writer::new();
    block.write_message_field(1, header_item);
    block.into_bytes()
}

fn items_frame(block_number: u64) -> Vec<u8> {
    // a BlockItemSet is shaped identically to Block's repeated BlockItem
    // field, so the same bytes decode correctly on the receiving end.
    let mut response = Writer::new();
    response.write_bytes_field(2, &one_item_block(block_number));
    response.into_bytes()
}

fn status_frame(status: i32) -> Vec<u8> {
    let mut response = Writer::new();
    response.write_int_field(1, status as i64);
    response.into_bytes()
}

#[tokio::test]
async fn subscribe_blocks_delivers_each_batch_then_ends_cleanly_on_status_zero() {
    let listener = TcpListener::bind(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let server = tokio::spawn(async move {
        let mut socket = accept_one_request(&listener).await;

        let mut body = Vec::new();
        for block_number in 10..=12u64 {
            body.extend_from_slice(&data_frame(&items_frame(block_number)));
        }
        body.extend_from_slice(&data_frame(&status_frame(0)));

        socket.write_all(&http_response(&body)).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    let transport = Transport::new(format!("http://{addr}"));
    let client = BlockStreamClient::new(transport);

    let invocations = Arc::new(AtomicUsize::new(0));
    let counter = invocations.clone();

    let result = client
        .subscribe_blocks(10, 12, CancellationToken::new(), move |items| {
            assert_eq!(items.len(), 1);
            counter.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        })
        .await;

    assert!(result.is_ok());
    assert_eq!(invocations.load(Ordering::SeqCst), 3);

    server.await.unwrap();
}

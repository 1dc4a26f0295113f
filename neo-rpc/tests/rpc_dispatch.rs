//! End-to-end dispatch of the invoker RPC methods through `process_request`.

use std::sync::Arc;

use neo_contract::ContractParameter;
use neo_crypto::Keypair;
use neo_primitives::{ContractParameterType, UInt160, UInt256};
use neo_rpc::server::{RpcHandler, RpcMethodDescriptor};
use neo_rpc::{
    AssetTransfer, ContractInvoker, InMemoryContractRegistry, InvocationError, InvokerSettings,
    RpcException, RpcServer,
};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{json, Value};

const CONTRACT: &str = "0xd2a4cff31913016155e38e474a2c06d08be276cf";
const PRIVATE_KEY: &str = "c7134d6fd8e73d819e82755c64c93788d8db0961929e025a53363c4cc02a6962";
const ADDRESS: &str = "NMACuhqEaNAeDSQVipcUPYiJ9TVgVyUxGV";

struct HashingInvoker;

impl ContractInvoker for HashingInvoker {
    fn call_contract(
        &self,
        _keypair: &Keypair,
        _contract: &UInt160,
        parameters: &[ContractParameter],
    ) -> Result<Option<UInt256>, InvocationError> {
        let mut bytes = [0u8; 32];
        bytes[0] = parameters.len() as u8;
        Ok(Some(UInt256::from(bytes)))
    }
}

#[derive(Default)]
struct RecordingAssets {
    sent: Mutex<Vec<(UInt160, Decimal, UInt256)>>,
}

impl AssetTransfer for RecordingAssets {
    fn send(
        &self,
        _keypair: &Keypair,
        to: &UInt160,
        amount: Decimal,
        asset: &UInt256,
    ) -> Result<Option<UInt256>, InvocationError> {
        self.sent.lock().push((*to, amount, *asset));
        Ok(Some(UInt256::from([0x33; 32])))
    }
}

fn server(settings: InvokerSettings, assets: Arc<RecordingAssets>) -> RpcServer {
    let registry = InMemoryContractRegistry::from_entries(&settings.contracts);
    RpcServer::new(settings, Arc::new(registry), Arc::new(HashingInvoker), assets)
}

fn settings() -> InvokerSettings {
    InvokerSettings::from_toml_str(&format!(
        r#"
        [[Contracts]]
        Hash = "{CONTRACT}"
        Parameters = ["String", "Array", "Map"]
        "#
    ))
    .unwrap()
}

fn request(method: &str, params: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": 7, "method": method, "params": params})
}

#[test]
fn invokecontractas_over_json_rpc() {
    let server = server(settings(), Arc::default());
    let response = server.process_request(&request(
        "invokecontractas",
        json!([
            CONTRACT,
            PRIVATE_KEY,
            [
                "transfer",
                [{"type": "Hash160", "value": CONTRACT}],
                [{"key": {"type": "String", "value": "k"}, "value": {"type": "Integer", "value": "1"}}]
            ]
        ]),
    ));
    assert_eq!(response["id"], 7);
    assert_eq!(response["jsonrpc"], "2.0");
    assert!(response.get("error").is_none(), "{response}");
    let mut expected = [0u8; 32];
    expected[0] = 3;
    assert_eq!(response["result"], json!(UInt256::from(expected).to_string()));
}

#[test]
fn decode_failure_reports_code_and_position() {
    let server = server(settings(), Arc::default());
    let response = server.process_request(&request(
        "invokecontractas",
        json!([CONTRACT, PRIVATE_KEY, ["transfer", "not-an-array"]]),
    ));
    assert_eq!(response["error"]["code"], -1211);
    let data = response["error"]["data"].as_str().unwrap();
    assert!(data.starts_with("parameter 1 (Array)"), "{data}");
}

#[test]
fn getaddress_derives_account() {
    let server = server(InvokerSettings::default(), Arc::default());
    let response = server.process_request(&request("getaddress", json!([PRIVATE_KEY])));
    let result = &response["result"];
    assert_eq!(result["address"], ADDRESS);
    assert_eq!(result["privkey"], PRIVATE_KEY);
    assert!(result["wif"].as_str().unwrap().starts_with('L'));

    let response = server.process_request(&request("getaddress", json!(["0011"])));
    assert_eq!(response["error"]["code"], -32602);
}

#[test]
fn send_resolves_aliases_and_defaults() {
    let assets = Arc::new(RecordingAssets::default());
    let server = server(InvokerSettings::default(), assets.clone());
    let defaults = InvokerSettings::default();

    let response = server.process_request(&request("send", json!([PRIVATE_KEY, ADDRESS, 1.5])));
    assert_eq!(
        response["result"]["txn_hash"],
        json!(UInt256::from([0x33; 32]).to_string())
    );
    server.process_request(&request("send", json!([PRIVATE_KEY, ADDRESS, "2", "cronium"])));
    server.process_request(&request("send", json!([PRIVATE_KEY, ADDRESS, "3", " CRON "])));

    let sent = assets.sent.lock();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].0, UInt160::from_address(ADDRESS, 0x35).unwrap());
    assert_eq!(sent[0].1, Decimal::new(15, 1));
    assert_eq!(sent[0].2, defaults.utility_token);
    assert_eq!(sent[1].2, defaults.governing_token);
    assert_eq!(sent[2].2, defaults.utility_token);
}

#[test]
fn send_rejects_bad_destination() {
    let assets = Arc::new(RecordingAssets::default());
    let server = server(InvokerSettings::default(), assets.clone());
    let response = server.process_request(&request("send", json!([PRIVATE_KEY, "Nnotanaddress", 1])));
    assert_eq!(response["error"]["code"], -32602);
    assert!(assets.sent.lock().is_empty());
}

#[test]
fn unknown_and_disabled_methods() {
    let mut settings = settings();
    settings.disabled_methods = vec!["Send".to_string()];
    let server = server(settings, Arc::default());

    let response = server.process_request(&request("getblock", json!([])));
    assert_eq!(response["error"]["code"], -32601);

    let response = server.process_request(&request("send", json!([PRIVATE_KEY, ADDRESS, 1])));
    assert_eq!(response["error"]["code"], -32601);

    assert_eq!(server.method_names(), vec!["getaddress", "invokecontractas"]);
}

#[test]
fn malformed_requests() {
    let server = server(settings(), Arc::default());
    assert_eq!(server.process_request(&json!([1, 2]))["error"]["code"], -32600);
    assert_eq!(
        server.process_request(&json!({"id": 1, "method": 5}))["error"]["code"],
        -32600
    );
    let response = server.process_request(&json!({"id": 1, "method": "getaddress", "params": {}}));
    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["id"], 1);
}

#[test]
fn custom_methods_can_be_registered() {
    let server = server(settings(), Arc::default());
    server.register_method(RpcHandler::new(
        RpcMethodDescriptor::new("listschemas"),
        Arc::new(|server: &RpcServer, _params: &[Value]| -> Result<Value, RpcException> {
            Ok(json!(server
                .settings()
                .contracts
                .iter()
                .map(|entry| entry.parameters.len())
                .collect::<Vec<_>>()))
        }),
    ));
    let response = server.process_request(&request("ListSchemas", json!([])));
    assert_eq!(response["result"], json!([3]));
    assert_eq!(
        server.settings().contracts[0].parameters[2],
        ContractParameterType::Map
    );
}

#[test]
fn plain_method_parameters_are_logged_at_debug() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    let server = server(settings(), Arc::default());
    server.register_method(RpcHandler::new(
        RpcMethodDescriptor::new("echo"),
        Arc::new(|_server: &RpcServer, params: &[Value]| -> Result<Value, RpcException> {
            Ok(Value::Array(params.to_vec()))
        }),
    ));
    let response = tracing::subscriber::with_default(subscriber, || {
        server.process_request(&request("echo", json!(["a", 1, {"b": true}])))
    });
    assert_eq!(response["result"], json!(["a", 1, {"b": true}]));
}

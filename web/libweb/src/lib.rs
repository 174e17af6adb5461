use serde::Serialize;
use vlq::DecodeError;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOC: lol_alloc::AssumeSingleThreaded<lol_alloc::FreeListAllocator> =
    unsafe { lol_alloc::AssumeSingleThreaded::new(lol_alloc::FreeListAllocator::new()) };

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct JsDecodeError {
    pub kind: &'static str,
    pub message: String,
    pub pos: Option<usize>,
}

impl JsDecodeError {
    pub fn new(err: DecodeError) -> JsDecodeError {
        JsDecodeError {
            kind: match err {
                DecodeError::IncompleteSequence { .. } => "IncompleteSequence",
                DecodeError::Overflow { .. } => "Overflow",
            },
            message: err.to_string(),
            pos: Some(err.pos()),
        }
    }

    pub fn from_hex(err: hex::FromHexError) -> JsDecodeError {
        JsDecodeError {
            kind: "InvalidHex",
            message: err.to_string(),
            pos: match err {
                hex::FromHexError::InvalidHexCharacter { index, .. } => Some(index),
                _ => None,
            },
        }
    }

    fn into_js(self) -> JsValue {
        serde_wasm_bindgen::to_value(&self).unwrap_or_else(|err| err.into())
    }
}

fn decode_hex_str(hex: &str) -> Result<Vec<u32>, JsDecodeError> {
    let bytes = hex::decode(hex.trim()).map_err(JsDecodeError::from_hex)?;
    vlq::decode(&bytes).map_err(JsDecodeError::new)
}

#[wasm_bindgen]
pub fn libweb_init() {
    #[cfg(feature = "console_error_panic_hook")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

#[wasm_bindgen]
pub fn encode(values: Vec<u32>) -> Vec<u8> {
    vlq::encode(&values)
}

/// Rejects with a `{ kind, message, pos }` object when the bytes are malformed.
#[wasm_bindgen]
pub fn decode(bytes: Vec<u8>) -> Result<Vec<u32>, JsValue> {
    vlq::decode(&bytes).map_err(|err| JsDecodeError::new(err).into_js())
}

#[wasm_bindgen(js_name = encodeHex)]
pub fn encode_hex(values: Vec<u32>) -> String {
    hex::encode_upper(vlq::encode(&values))
}

#[wasm_bindgen(js_name = decodeHex)]
pub fn decode_hex(hex: &str) -> Result<Vec<u32>, JsValue> {
    decode_hex_str(hex).map_err(JsDecodeError::into_js)
}

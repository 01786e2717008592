//! Contract artifact.
//!
//! The token contract is compiled elsewhere. What reaches this crate is a
//! JSON artifact with an `abi` and a hex-encoded `bytecode`; the bytecode is
//! treated as an opaque blob and only the constructor is read from the ABI.

use std::{fs, path::Path};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt},
    hex,
    json_abi::{Constructor, JsonAbi},
    primitives::Bytes,
};
use serde::Deserialize;
use thiserror::Error;

/// The ERC-20 artifact bundled at build time.
const BUNDLED_TOKEN: &str = include_str!("../artifacts/Token.json");

/// Errors raised while loading or using a [`ContractArtifact`].
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact file could not be read.
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),
    /// The artifact is not valid JSON or has the wrong shape.
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    /// The bytecode is not valid hex.
    #[error("malformed bytecode: {0}")]
    Hex(#[from] hex::FromHexError),
    /// The ABI declares no constructor.
    #[error("artifact ABI has no constructor")]
    MissingConstructor,
    /// The artifact carries no bytecode.
    #[error("artifact bytecode is empty")]
    EmptyBytecode,
    /// Constructor arguments do not match the ABI.
    #[error("failed to encode constructor arguments: {0}")]
    Encoding(#[from] alloy::dyn_abi::Error),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: String,
}

/// A compiled contract: interface description plus deployment code.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    name: String,
    abi: JsonAbi,
    constructor: Constructor,
    bytecode: Bytes,
}

impl ContractArtifact {
    /// Returns the bundled ERC-20 token artifact.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled file is corrupt; see
    /// [`ContractArtifact::from_json`].
    pub fn bundled() -> Result<Self, ArtifactError> {
        Self::from_json(BUNDLED_TOKEN)
    }

    /// Reads an artifact from the JSON file at `path`.
    ///
    /// # Errors
    ///
    /// * [`ArtifactError::Io`] - If the file cannot be read.
    /// * Any error of [`ContractArtifact::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parses an artifact from `json`.
    ///
    /// # Errors
    ///
    /// * [`ArtifactError::Json`] - If `json` has the wrong shape.
    /// * [`ArtifactError::Hex`] - If the bytecode is not hex.
    /// * [`ArtifactError::EmptyBytecode`] - If there is no bytecode.
    /// * [`ArtifactError::MissingConstructor`] - If the ABI has no
    ///   constructor.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;

        let bytecode = Bytes::from(hex::decode(raw.bytecode.trim())?);
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode);
        }
        let constructor = raw
            .abi
            .constructor
            .clone()
            .ok_or(ArtifactError::MissingConstructor)?;

        Ok(Self {
            name: raw.contract_name.unwrap_or_else(|| "Contract".to_owned()),
            abi: raw.abi,
            constructor,
            bytecode,
        })
    }

    /// The contract name, `Contract` when the artifact does not say.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contract's ABI.
    #[must_use]
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// The deployment bytecode, without constructor arguments.
    #[must_use]
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Constructor signature, e.g. `constructor(string,string,uint256)`.
    #[must_use]
    pub fn constructor_signature(&self) -> String {
        let params = self
            .constructor
            .inputs
            .iter()
            .map(|param| param.selector_type().into_owned())
            .collect::<Vec<_>>()
            .join(",");
        format!("constructor({params})")
    }

    /// Appends the ABI-encoded constructor `args` to the bytecode.
    ///
    /// # Errors
    ///
    /// * [`ArtifactError::Encoding`] - If `args` do not match the
    ///   constructor's inputs.
    pub fn creation_code(
        &self,
        args: &[DynSolValue],
    ) -> Result<Bytes, ArtifactError> {
        let encoded = self.constructor.abi_encode_input(args)?;
        Ok([self.bytecode.as_ref(), encoded.as_slice()].concat().into())
    }
}

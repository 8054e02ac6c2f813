//! Client Assembler: gathers records and methods into one [`ClientUnit`].

use swagger2sdk_define::AuthStrategy;
use tracing::info;

use crate::errors::Result;
use crate::ir::{CallableUnit, ClientDef, ClientUnit, Import, OperationRecords, RecordDef};
use crate::validation::validate_record_names;

/// Accumulates synthesized operations into a client.
///
/// Records keep first-seen order across operations and methods keep load
/// order. The assembler is the only writer of the unit under construction;
/// [`ClientAssembler::finish`] hands it over read-only.
///
/// ## Examples
///
/// ```
/// use swagger2sdk_define::AuthStrategy;
/// use swagger2sdk_gen::synth::client::ClientAssembler;
///
/// let unit = ClientAssembler::new("PetStore", AuthStrategy::Basic, "https://pets.example.com")
///     .finish()
///     .unwrap();
///
/// assert_eq!(unit.client.credential_fields, vec!["username", "password"]);
/// assert!(unit.records.is_empty());
/// ```
#[derive(Debug)]
pub struct ClientAssembler {
    name: String,
    auth: AuthStrategy,
    base_url: String,
    records: Vec<RecordDef>,
    methods: Vec<CallableUnit>,
}

impl ClientAssembler {
    pub fn new(name: impl Into<String>, auth: AuthStrategy, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auth,
            base_url: base_url.into(),
            records: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Appends one operation's records and method.
    pub fn push(&mut self, records: OperationRecords, method: CallableUnit) {
        for record in [records.parameters, records.body, records.response]
            .into_iter()
            .flatten()
        {
            if !self.records.iter().any(|r| r.name == record.name) {
                self.records.push(record);
            }
        }
        self.methods.push(method);
    }

    /// Builds the finished unit.
    ///
    /// ## Errors
    ///
    /// Returns [`crate::errors::GeneratorError::NamingCollision`] when a
    /// record is named like the client or the generated error type.
    pub fn finish(self) -> Result<ClientUnit> {
        validate_record_names(&self.records, &self.name)?;

        info!(
            client = %self.name,
            auth = %self.auth,
            records = self.records.len(),
            methods = self.methods.len(),
            "Assembled client"
        );

        Ok(ClientUnit {
            imports: Import::ALL.to_vec(),
            records: self.records,
            client: ClientDef {
                credential_fields: self
                    .auth
                    .credential_fields()
                    .iter()
                    .map(|f| f.to_string())
                    .collect(),
                name: self.name,
                auth: self.auth,
                base_url: self.base_url,
                methods: self.methods,
            },
        })
    }
}

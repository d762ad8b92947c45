//! Per-version schema registry: command tables, pair tables and the
//! descriptor pools the dynamic codec resolves against.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info};
use viaduct_proto_parser::proto::{Enum, Message};
use viaduct_proto_parser::{parse_proto_file, ProtoFile};

use crate::{tables, CodecError, Protocol, RegistryError};
use crate::{decode, encode};

/// Resolved descriptors of one protocol version.
#[derive(Default)]
pub(crate) struct Pool {
    messages: HashMap<String, Message>,
    enums: HashMap<String, Enum>,
    /// File stems already ingested, to stop import recursion.
    loaded: HashSet<String>,
}

impl Pool {
    fn insert_file(&mut self, file: &ProtoFile) {
        for message in &file.messages {
            self.insert_message_tree(message);
        }
        for e in &file.enums {
            self.enums.entry(e.name.clone()).or_insert_with(|| e.clone());
        }
    }

    /// Register a message and everything nested inside it by simple name.
    fn insert_message_tree(&mut self, message: &Message) {
        self.messages
            .entry(message.name.clone())
            .or_insert_with(|| message.clone());
        for nested in &message.nested_messages {
            self.insert_message_tree(nested);
        }
        for e in &message.nested_enums {
            self.enums.entry(e.name.clone()).or_insert_with(|| e.clone());
        }
    }

    pub(crate) fn message(&self, name: &str) -> Option<&Message> {
        self.messages.get(name)
    }

    /// Resolve a named type from a message scope: directly nested types
    /// shadow pool-level ones.
    pub(crate) fn resolve_message<'a>(&'a self, scope: &'a Message, name: &str) -> Option<&'a Message> {
        scope.nested_message(name).or_else(|| self.messages.get(name))
    }

    pub(crate) fn resolve_enum<'a>(&'a self, scope: &'a Message, name: &str) -> Option<&'a Enum> {
        scope.nested_enum(name).or_else(|| self.enums.get(name))
    }
}

/// Cross-version command and schema mapping.
///
/// All pair tables pivot through the base version: an id translates
/// `from → base → to` by symbolic name at load time, so at run time a
/// single table lookup suffices.
pub struct Mapping {
    base: Protocol,
    base_commands: HashMap<String, u16>,

    command_names: HashMap<Protocol, HashMap<u16, String>>,
    command_ids: HashMap<Protocol, HashMap<String, u16>>,
    command_pairs: HashMap<Protocol, HashMap<Protocol, HashMap<u16, u16>>>,
    pools: HashMap<Protocol, Pool>,
}

impl Mapping {
    /// Load every configured version; the base version loads first so the
    /// pair tables can be derived while the others stream in.
    pub fn load(
        base: &Protocol,
        dirs: &HashMap<Protocol, PathBuf>,
    ) -> Result<Self, RegistryError> {
        let mut mapping = Self {
            base: base.clone(),
            base_commands: HashMap::new(),
            command_names: HashMap::new(),
            command_ids: HashMap::new(),
            command_pairs: HashMap::new(),
            pools: HashMap::new(),
        };

        let base_dir = dirs
            .get(base)
            .ok_or_else(|| RegistryError::UnknownVersion(base.clone()))?;
        info!(protocol = %base, "loading base protocol");
        mapping.load_protocol(base, base_dir)?;

        for (version, dir) in dirs {
            if version == base {
                continue;
            }
            info!(protocol = %version, "loading protocol");
            mapping.load_protocol(version, dir)?;
        }
        Ok(mapping)
    }

    fn load_protocol(&mut self, version: &Protocol, dir: &Path) -> Result<(), RegistryError> {
        let csv_path = dir.join("protocol.csv");
        let csv = std::fs::read_to_string(&csv_path)
            .map_err(|source| RegistryError::Io { path: csv_path, source })?;

        self.command_names.entry(version.clone()).or_default();
        self.command_ids.entry(version.clone()).or_default();
        self.command_pairs.entry(version.clone()).or_default();
        if version != &self.base {
            self.command_pairs
                .entry(self.base.clone())
                .or_default()
                .entry(version.clone())
                .or_default();
            self.command_pairs
                .get_mut(version)
                .unwrap()
                .entry(self.base.clone())
                .or_default();
        }
        self.pools.entry(version.clone()).or_default();

        for line in csv.lines() {
            let line = line.trim();
            let Some((name, id)) = line.split_once(',') else { continue };
            let name = name.trim();
            if name.is_empty() || name == "DebugNotify" {
                continue;
            }
            let id: u16 = match id.trim().parse() {
                Ok(id) => id,
                Err(e) => {
                    error!(protocol = %version, name, "bad command id: {e}");
                    continue;
                }
            };
            if self.command_ids[version].contains_key(name) {
                return Err(RegistryError::DuplicateCommand {
                    protocol: version.clone(),
                    name: name.to_owned(),
                });
            }
            self.register_command(version, name, id);
            if let Err(e) = self.load_message(version, dir, name) {
                error!(protocol = %version, name, "failed to load schema: {e}");
            }
        }

        // The argument tables name messages that never appear in the
        // command csv but ride inside opaque sub-fields.
        for name in tables::argument_message_names() {
            let _ = self.load_message(version, dir, name);
        }
        Ok(())
    }

    fn register_command(&mut self, version: &Protocol, name: &str, id: u16) {
        self.command_names
            .get_mut(version)
            .unwrap()
            .insert(id, name.to_owned());
        self.command_ids
            .get_mut(version)
            .unwrap()
            .insert(name.to_owned(), id);

        if version == &self.base {
            self.base_commands.insert(name.to_owned(), id);
        } else if let Some(&base_id) = self.base_commands.get(name) {
            self.command_pairs
                .get_mut(version)
                .unwrap()
                .get_mut(&self.base)
                .unwrap()
                .insert(id, base_id);
            self.command_pairs
                .get_mut(&self.base)
                .unwrap()
                .get_mut(version)
                .unwrap()
                .insert(base_id, id);
        } else {
            debug!(protocol = %version, name, "no base counterpart, omitted from pair table");
        }
    }

    /// Ingest `<dir>/protocol/<name>.proto` plus its imports.
    fn load_message(
        &mut self,
        version: &Protocol,
        dir: &Path,
        name: &str,
    ) -> Result<(), RegistryError> {
        let pool = self.pools.get_mut(version).unwrap();
        if pool.loaded.contains(name) {
            return Ok(());
        }
        pool.loaded.insert(name.to_owned());

        let path = dir.join("protocol").join(format!("{name}.proto"));
        let src = std::fs::read_to_string(&path)
            .map_err(|source| RegistryError::Io { path, source })?;
        let file = parse_proto_file(&src).map_err(|source| RegistryError::Schema {
            file: format!("{name}.proto"),
            source,
        })?;
        pool.insert_file(&file);

        for import in &file.imports {
            let import = import.clone();
            if let Err(e) = self.load_message(version, dir, &import) {
                debug!(protocol = %version, name = %import, "import not loaded: {e}");
            }
        }
        Ok(())
    }

    /// The base (upstream-facing) version.
    pub fn base(&self) -> &Protocol {
        &self.base
    }

    /// Symbolic name of a command id in `version`.
    pub fn command_name(&self, version: &Protocol, id: u16) -> Option<&str> {
        self.command_names.get(version)?.get(&id).map(String::as_str)
    }

    /// Command id of a symbolic name in `version`.
    pub fn command_id(&self, version: &Protocol, name: &str) -> Option<u16> {
        self.command_ids.get(version)?.get(name).copied()
    }

    /// Translate a command id from one version to another.
    pub fn pair(&self, from: &Protocol, to: &Protocol, id: u16) -> Option<u16> {
        if from == to {
            return Some(id);
        }
        self.command_pairs.get(from)?.get(to)?.get(&id).copied()
    }

    /// Whether `version` carries a schema for `name`.
    pub fn has_schema(&self, version: &Protocol, name: &str) -> bool {
        self.pools
            .get(version)
            .is_some_and(|pool| pool.message(name).is_some())
    }

    /// Decode a binary body into the canonical form.
    pub fn decode(
        &self,
        version: &Protocol,
        name: &str,
        bytes: &[u8],
    ) -> Result<Value, RegistryError> {
        let pool = self
            .pools
            .get(version)
            .ok_or_else(|| RegistryError::UnknownVersion(version.clone()))?;
        let desc = pool.message(name).ok_or_else(|| RegistryError::UnknownMessage {
            protocol: version.clone(),
            name: name.to_owned(),
        })?;
        decode::decode_message(pool, desc, bytes).map_err(|source| codec_error(name, source))
    }

    /// Encode the canonical form back to binary under `version`'s schema.
    pub fn encode(
        &self,
        version: &Protocol,
        name: &str,
        value: &Value,
    ) -> Result<Vec<u8>, RegistryError> {
        let pool = self
            .pools
            .get(version)
            .ok_or_else(|| RegistryError::UnknownVersion(version.clone()))?;
        let desc = pool.message(name).ok_or_else(|| RegistryError::UnknownMessage {
            protocol: version.clone(),
            name: name.to_owned(),
        })?;
        encode::encode_message(pool, desc, value).map_err(|source| codec_error(name, source))
    }
}

fn codec_error(name: &str, source: CodecError) -> RegistryError {
    RegistryError::Codec { message: name.to_owned(), source }
}

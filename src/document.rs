//! Document accumulation — attach parsed blocks to the growing document.

use crate::model::{Document, FunctionRecord, Meta, StructureRecord};
use crate::parser::block::ParsedBlock;

/// Accumulates parsed blocks across files into a single [`Document`].
///
/// Methods attach to the structure whose name equals their receiver type.
/// A method seen before its structure is dropped; the drop is counted so
/// the run can report it instead of silently losing records.
pub struct DocumentBuilder {
    document: Document,
    dropped_methods: usize,
}

impl DocumentBuilder {
    pub fn new(meta: Meta) -> Self {
        Self {
            document: Document {
                meta,
                ..Document::default()
            },
            dropped_methods: 0,
        }
    }

    pub fn add(&mut self, block: ParsedBlock) {
        match block {
            ParsedBlock::Function(record) => self.add_function(record),
            ParsedBlock::Method { owner, record } => self.add_method(&owner, record),
            ParsedBlock::Structure(record) => self.add_structure(record),
        }
    }

    fn add_function(&mut self, record: FunctionRecord) {
        self.document.functions.push(record);
    }

    /// Duplicate structure names stay distinct entries; no merging.
    fn add_structure(&mut self, record: StructureRecord) {
        self.document.structures.push(record);
    }

    fn add_method(&mut self, owner: &str, record: FunctionRecord) {
        match self
            .document
            .structures
            .iter_mut()
            .find(|s| s.name == owner)
        {
            Some(structure) => structure.methods.push(record),
            None => self.dropped_methods += 1,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn dropped_methods(&self) -> usize {
        self.dropped_methods
    }
}

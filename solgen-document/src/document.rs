//! The declaration store.

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use solgen_codegen::{BraceFormatter, Formatter};
use solgen_ir::{
    Attribute, AttributePatch, Container, ContainerPatch, Declaration, DeclarationKey,
    DeclarationKind, Function, FunctionPatch, Mapping, MappingPatch, Struct, StructPatch,
};
use tracing::{debug, trace};

use crate::{DocumentError, Replacements, Result, render};

/// An ordered, kind+name indexed set of declarations plus the replacement
/// rules and formatter used to render them.
///
/// Documents are plain values: build as many as needed, side by side.
#[derive(Clone)]
pub struct Document {
    declarations: IndexMap<DeclarationKey, Declaration>,
    replacements: Replacements,
    formatter: Arc<dyn Formatter>,
}

impl Document {
    /// Create an empty document using the default [`BraceFormatter`].
    pub fn new() -> Self {
        Self {
            declarations: IndexMap::new(),
            replacements: Replacements::new(),
            formatter: Arc::new(BraceFormatter::default()),
        }
    }

    /// Use `formatter` for the final formatting pass.
    pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.set_formatter(formatter);
        self
    }

    pub fn set_formatter(&mut self, formatter: impl Formatter + 'static) {
        self.formatter = Arc::new(formatter);
    }

    // =========================================================================
    // Adding
    // =========================================================================

    /// Append a declaration of any kind.
    ///
    /// Fails only when the same kind+name is already present; nothing else
    /// about the record is checked. Names are unique across the whole
    /// document, not per container, so a derived contract cannot redeclare
    /// a member its parent already declared here. Render such overrides
    /// from a separate document.
    pub fn add(&mut self, declaration: impl Into<Declaration>) -> Result<()> {
        let declaration = declaration.into();
        let key = declaration.key();
        if self.declarations.contains_key(&key) {
            return Err(DocumentError::Duplicate {
                kind: key.kind,
                name: key.name,
            });
        }

        debug!(%key, position = self.declarations.len(), "adding declaration");
        self.declarations.insert(key, declaration);
        Ok(())
    }

    /// Append a container, opening a new segment.
    pub fn add_container(&mut self, container: Container) -> Result<()> {
        self.add(container)
    }

    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<()> {
        self.add(attribute)
    }

    pub fn add_struct(&mut self, structure: Struct) -> Result<()> {
        self.add(structure)
    }

    pub fn add_mapping(&mut self, mapping: Mapping) -> Result<()> {
        self.add(mapping)
    }

    pub fn add_function(&mut self, function: Function) -> Result<()> {
        self.add(function)
    }

    // =========================================================================
    // Changing
    //
    // Each change returns `true` if a declaration was found and patched.
    // A missing target is not an error.
    // =========================================================================

    pub fn change_container(&mut self, patch: ContainerPatch) -> bool {
        match self.get_mut(DeclarationKind::Container, &patch.name) {
            Some(Declaration::Container(container)) => {
                patch.apply(container);
                true
            }
            _ => false,
        }
    }

    pub fn change_attribute(&mut self, patch: AttributePatch) -> bool {
        match self.get_mut(DeclarationKind::Attribute, &patch.name) {
            Some(Declaration::Attribute(attribute)) => {
                patch.apply(attribute);
                true
            }
            _ => false,
        }
    }

    pub fn change_struct(&mut self, patch: StructPatch) -> bool {
        match self.get_mut(DeclarationKind::Struct, &patch.name) {
            Some(Declaration::Struct(structure)) => {
                patch.apply(structure);
                true
            }
            _ => false,
        }
    }

    pub fn change_mapping(&mut self, patch: MappingPatch) -> bool {
        match self.get_mut(DeclarationKind::Mapping, &patch.name) {
            Some(Declaration::Mapping(mapping)) => {
                patch.apply(mapping);
                true
            }
            _ => false,
        }
    }

    pub fn change_function(&mut self, patch: FunctionPatch) -> bool {
        match self.get_mut(DeclarationKind::Function, &patch.name) {
            Some(Declaration::Function(function)) => {
                patch.apply(function);
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Removing
    // =========================================================================

    /// Remove a declaration by kind and name, keeping the order of the rest.
    pub fn remove(&mut self, kind: DeclarationKind, name: &str) -> Option<Declaration> {
        let key = DeclarationKey::new(kind, name);
        let removed = self.declarations.shift_remove(&key);
        if removed.is_some() {
            debug!(%key, "removed declaration");
        } else {
            trace!(%key, "nothing to remove");
        }
        removed
    }

    pub fn remove_container(&mut self, name: &str) -> Option<Container> {
        match self.remove(DeclarationKind::Container, name)? {
            Declaration::Container(container) => Some(container),
            _ => None,
        }
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<Attribute> {
        match self.remove(DeclarationKind::Attribute, name)? {
            Declaration::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn remove_struct(&mut self, name: &str) -> Option<Struct> {
        match self.remove(DeclarationKind::Struct, name)? {
            Declaration::Struct(structure) => Some(structure),
            _ => None,
        }
    }

    pub fn remove_mapping(&mut self, name: &str) -> Option<Mapping> {
        match self.remove(DeclarationKind::Mapping, name)? {
            Declaration::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn remove_function(&mut self, name: &str) -> Option<Function> {
        match self.remove(DeclarationKind::Function, name)? {
            Declaration::Function(function) => Some(function),
            _ => None,
        }
    }

    // =========================================================================
    // Replacements and reset
    // =========================================================================

    /// Register a literal replacement applied to the rendered text.
    pub fn add_replacement(&mut self, from: impl Into<String>, to: impl Into<String>) {
        let (from, to) = (from.into(), to.into());
        debug!(%from, %to, "registering replacement");
        self.replacements.insert(from, to);
    }

    pub fn replacements(&self) -> &Replacements {
        &self.replacements
    }

    /// Drop every declaration and replacement rule. The formatter is kept.
    pub fn reset(&mut self) {
        debug!(
            declarations = self.declarations.len(),
            replacements = self.replacements.len(),
            "resetting document"
        );
        self.declarations.clear();
        self.replacements.clear();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations in render order.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.values()
    }

    pub fn get(&self, kind: DeclarationKind, name: &str) -> Option<&Declaration> {
        self.declarations.get(&DeclarationKey::new(kind, name))
    }

    pub fn contains(&self, kind: DeclarationKind, name: &str) -> bool {
        self.get(kind, name).is_some()
    }

    fn get_mut(&mut self, kind: DeclarationKind, name: &str) -> Option<&mut Declaration> {
        let key = DeclarationKey::new(kind, name);
        let found = self.declarations.get_mut(&key);
        if found.is_some() {
            debug!(%key, "changing declaration");
        } else {
            trace!(%key, "nothing to change");
        }
        found
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render with replacements applied but without formatting.
    pub fn render_raw(&self) -> Result<String> {
        let text = render::render(self.declarations.values())?;
        Ok(self.replacements.apply(text))
    }

    /// Render, apply replacements and format.
    pub fn render(&self) -> Result<String> {
        let raw = self.render_raw()?;
        Ok(self.formatter.format(&raw))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("declarations", &self.declarations)
            .field("replacements", &self.replacements)
            .finish_non_exhaustive()
    }
}

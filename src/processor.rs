//! Tree processors and the ordered chain that applies them.
//!
//! A [`Processor`] takes ownership of a tree and hands back a (possibly
//! rewritten) tree. [`ProcessorChain`] runs registered processors in
//! insertion order and stops at the first failure.
//!
//! ```
//! use astkit::processor::{LocationAdjustProcessor, ProcessorChain};
//! use astkit_ast::{Mod, Stmt};
//!
//! let mut chain = ProcessorChain::new();
//! chain.add(LocationAdjustProcessor::new(10, 0));
//! assert!(chain.contains(LocationAdjustProcessor::NAME));
//!
//! let tree = chain.run(Mod::module(vec![Stmt::pass()])).unwrap();
//! assert_eq!(tree, Mod::module(vec![Stmt::pass()]));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use astkit_ast::{adjust_location, Mod, RenderOptions, SourceRenderer};

use crate::error::AstkitError;

// ============================================================================
// Processor trait
// ============================================================================

/// A whole-tree transformation.
pub trait Processor {
    /// Name used to look the processor up in a chain.
    fn name(&self) -> &str;

    /// Transform `tree`.
    fn process(&mut self, tree: Mod) -> Result<Mod, AstkitError>;
}

/// Adapter turning a named closure into a [`Processor`].
pub struct FnProcessor<F> {
    name: String,
    f: F,
}

impl<F> FnProcessor<F>
where
    F: FnMut(Mod) -> Result<Mod, AstkitError>,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Processor for FnProcessor<F>
where
    F: FnMut(Mod) -> Result<Mod, AstkitError>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn process(&mut self, tree: Mod) -> Result<Mod, AstkitError> {
        (self.f)(tree)
    }
}

// ============================================================================
// Chain
// ============================================================================

/// Ordered list of processors.
///
/// Names need not be unique; lookups and removal act on the first match.
#[derive(Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn Processor>>,
}

impl fmt::Debug for ProcessorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorChain")
            .field("processors", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a processor; it runs after every processor already added.
    pub fn add<P: Processor + 'static>(&mut self, processor: P) -> &mut Self {
        tracing::debug!("adding processor '{}'", processor.name());
        self.processors.push(Box::new(processor));
        self
    }

    /// Remove the first processor called `name`.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Processor>> {
        let index = self.processors.iter().position(|p| p.name() == name)?;
        tracing::debug!("removing processor '{}'", name);
        Some(self.processors.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processors.iter().any(|p| p.name() == name)
    }

    /// Processor names in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.processors.iter().map(|p| p.name())
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Run every processor in order, feeding each the previous output.
    pub fn run(&mut self, mut tree: Mod) -> Result<Mod, AstkitError> {
        for processor in &mut self.processors {
            tracing::debug!("running processor '{}'", processor.name());
            tree = processor.process(tree)?;
        }
        Ok(tree)
    }
}

// ============================================================================
// Shipped processors
// ============================================================================

/// Shifts every recorded position by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationAdjustProcessor {
    lineno: u32,
    col_offset: u32,
}

impl LocationAdjustProcessor {
    pub const NAME: &'static str = "adjust-location";

    pub fn new(lineno: u32, col_offset: u32) -> Self {
        Self { lineno, col_offset }
    }
}

impl Processor for LocationAdjustProcessor {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&mut self, mut tree: Mod) -> Result<Mod, AstkitError> {
        let adjusted = adjust_location(&mut tree, self.lineno, self.col_offset);
        tracing::debug!(
            "shifted {} positions by {} lines, {} columns",
            adjusted,
            self.lineno,
            self.col_offset
        );
        Ok(tree)
    }
}

/// Shared view of the text a [`RenderTap`] produced most recently.
#[derive(Debug, Clone, Default)]
pub struct TapOutput(Rc<RefCell<Option<String>>>);

impl TapOutput {
    pub fn last(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

/// Renders the tree passing through it and returns the tree unchanged.
///
/// The rendering is logged at debug level and kept for the caller through
/// [`RenderTap::output`]. A tree the renderer rejects fails the chain.
#[derive(Debug)]
pub struct RenderTap {
    renderer: SourceRenderer,
    output: TapOutput,
}

impl RenderTap {
    pub const NAME: &'static str = "render-tap";

    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: SourceRenderer::with_options(options),
            output: TapOutput::default(),
        }
    }

    /// Handle that stays valid after the tap moves into a chain.
    pub fn output(&self) -> TapOutput {
        self.output.clone()
    }
}

impl Processor for RenderTap {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process(&mut self, tree: Mod) -> Result<Mod, AstkitError> {
        let source = self.renderer.render_module(&tree)?;
        tracing::debug!("rendered {} bytes:\n{}", source.len(), source);
        *self.output.0.borrow_mut() = Some(source);
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astkit_ast::{Expr, NodeKind, Position, PythonVersion, RenderError, Stmt};

    fn positioned_module() -> Mod {
        let mut stmt = Stmt::assign(vec![Expr::name("x")], Expr::int(1));
        if let Stmt::Assign(assign) = &mut stmt {
            assign.position = Some(Position::new(1, 0));
        }
        Mod::module(vec![stmt])
    }

    fn first_position(tree: &Mod) -> Option<Position> {
        match tree {
            Mod::Module(module) => match module.body.first() {
                Some(Stmt::Assign(assign)) => assign.position,
                _ => None,
            },
            _ => None,
        }
    }

    #[test]
    fn new_chain_is_empty() {
        let chain = ProcessorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn add_and_remove_by_name() {
        let mut chain = ProcessorChain::new();
        chain
            .add(LocationAdjustProcessor::new(1, 0))
            .add(RenderTap::new(RenderOptions::default()));
        assert_eq!(chain.len(), 2);
        assert!(chain.contains(RenderTap::NAME));
        assert_eq!(
            chain.names().collect::<Vec<_>>(),
            vec![LocationAdjustProcessor::NAME, RenderTap::NAME]
        );

        let removed = chain.remove(LocationAdjustProcessor::NAME).unwrap();
        assert_eq!(removed.name(), LocationAdjustProcessor::NAME);
        assert!(!chain.contains(LocationAdjustProcessor::NAME));
        assert!(chain.remove("missing").is_none());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn processors_run_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut chain = ProcessorChain::new();
        for name in ["first", "second", "third"] {
            let log = Rc::clone(&log);
            chain.add(FnProcessor::new(name, move |tree| {
                log.borrow_mut().push(name);
                Ok(tree)
            }));
        }
        chain.run(Mod::module(vec![])).unwrap();
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn failure_stops_the_chain() {
        let reached = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&reached);
        let mut chain = ProcessorChain::new();
        chain
            .add(FnProcessor::new("reject", |_| {
                Err(AstkitError::processor("reject", "nope"))
            }))
            .add(FnProcessor::new("after", move |tree| {
                *flag.borrow_mut() = true;
                Ok(tree)
            }));
        let err = chain.run(Mod::module(vec![])).unwrap_err();
        assert_eq!(err.to_string(), "processor 'reject' failed: nope");
        assert!(!*reached.borrow());
    }

    #[test]
    fn location_processor_shifts_positions() {
        let mut chain = ProcessorChain::new();
        chain.add(LocationAdjustProcessor::new(10, 4));
        let tree = chain.run(positioned_module()).unwrap();
        assert_eq!(first_position(&tree), Some(Position::new(11, 4)));
    }

    #[test]
    fn render_tap_keeps_last_rendering() {
        let tap = RenderTap::new(RenderOptions::default());
        let output = tap.output();
        let mut chain = ProcessorChain::new();
        chain.add(tap);

        let tree = positioned_module();
        let back = chain.run(tree.clone()).unwrap();
        assert_eq!(back, tree);
        assert_eq!(output.last().as_deref(), Some("x = 1\n"));
    }

    #[test]
    fn render_tap_propagates_render_errors() {
        let mut chain = ProcessorChain::new();
        chain.add(RenderTap::new(RenderOptions::new(PythonVersion::V2_7)));
        let tree = Mod::module(vec![Stmt::expr(Expr::Await(astkit_ast::Await {
            value: Box::new(Expr::name("x")),
            position: None,
        }))]);
        match chain.run(tree) {
            Err(AstkitError::Render(RenderError::UnsupportedKind { kind, .. })) => {
                assert_eq!(kind, NodeKind::Await)
            }
            other => panic!("expected render failure, got {:?}", other),
        }
    }
}

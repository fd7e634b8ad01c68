//! Run driver: turns a root node into a lazy stream of lifecycle events and text fragments.
//!
//! A [`SourceGenerator`] is immutable; every call to [`SourceGenerator::process`] starts an
//! independent run with its own indentation state. Nodes are expanded only when the consumer pulls
//! past them, so a slow consumer is never outpaced by the traversal.

use std::borrow::Cow;
use std::iter::FusedIterator;

use luagen_syntax::ast::Node;

use super::config::GenerateConfig;
use super::dispatch::{self, Step};
use super::errors::GenerateError;
use super::writer::IndentWriter;

/// Source generator for a single tree.
///
/// ## Examples
/// ```rust
/// use luagen::ast::{Chunk, Statement};
/// use luagen::SourceGenerator;
///
/// let body = Statement::Do(Chunk::new(vec![Statement::Break]));
/// let generator = SourceGenerator::new(&body);
/// assert_eq!(generator.generate().unwrap(), "do\n  break\nend");
/// ```
#[derive(Debug, Clone)]
pub struct SourceGenerator<'a> {
    root: Node<'a>,
    config: GenerateConfig,
}

impl<'a> SourceGenerator<'a> {
    /// Create a generator with the default configuration
    pub fn new(root: impl Into<Node<'a>>) -> Self {
        Self::with_config(root, GenerateConfig::default())
    }

    /// Create a generator with the given config
    pub fn with_config(root: impl Into<Node<'a>>, config: GenerateConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> Node<'a> {
        self.root
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Start a run, yielding `Start`, the data fragments, then exactly one of `End` or `Error`.
    pub fn process(&self) -> Process<'_> {
        Process::new(self.root, &self.config)
    }

    /// Start a run, yielding only data fragments; a failed run ends with one `Err`.
    pub fn fragments(&self) -> Fragments<'_> {
        Fragments {
            process: self.process(),
        }
    }

    /// Run to completion and concatenate the data fragments.
    #[tracing::instrument(skip_all, fields(root = self.root.kind()))]
    pub fn generate(&self) -> Result<String, GenerateError> {
        self.fragments().collect()
    }
}

/// Lifecycle and data signals of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<'s> {
    Start,
    Data(Cow<'s, str>),
    End,
    Error(GenerateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    Pending,
    Running,
    Finished,
}

/// A single generation run. Not restartable; once the terminal event is yielded it only returns
/// `None`.
#[derive(Debug)]
pub struct Process<'s> {
    writer: IndentWriter<'s>,
    /// Pending work, next step on top
    stack: Vec<Step<'s>>,
    state: RunState,
    root_kind: &'static str,
    fragments: usize,
}

impl<'s> Process<'s> {
    fn new(root: Node<'s>, config: &'s GenerateConfig) -> Self {
        let mut stack = match root {
            // The root block's statements sit at the outermost level; nested blocks indent themselves.
            Node::Chunk(chunk) => dispatch::root_block(chunk),
            _ => vec![Step::Node(root)],
        };
        stack.reverse();
        Self {
            writer: IndentWriter::new(config),
            stack,
            state: RunState::Pending,
            root_kind: root.kind(),
            fragments: 0,
        }
    }

    fn data(&mut self, fragment: Cow<'s, str>) -> Option<Event<'s>> {
        self.fragments += 1;
        Some(Event::Data(fragment))
    }
}

impl<'s> Iterator for Process<'s> {
    type Item = Event<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            RunState::Pending => {
                self.state = RunState::Running;
                tracing::trace!(root = self.root_kind, "generation started");
                return Some(Event::Start);
            }
            RunState::Finished => return None,
            RunState::Running => {}
        }

        while let Some(step) = self.stack.pop() {
            match step {
                Step::Text(text) if text.is_empty() => {}
                Step::Text(text) => return self.data(text),
                Step::Line => {
                    let line = self.writer.line();
                    return self.data(line);
                }
                Step::Indent => self.writer.indent(),
                Step::Dedent => self.writer.dedent(),
                Step::Node(node) => match dispatch::expand(node) {
                    Ok(steps) => self.stack.extend(steps.into_iter().rev()),
                    Err(err) => {
                        self.state = RunState::Finished;
                        self.stack.clear();
                        tracing::debug!(
                            root = self.root_kind,
                            kind = err.kind(),
                            depth = self.writer.current_indent(),
                            "generation aborted"
                        );
                        return Some(Event::Error(err));
                    }
                },
            }
        }

        self.state = RunState::Finished;
        tracing::debug!(root = self.root_kind, fragments = self.fragments, "generation finished");
        Some(Event::End)
    }
}

impl FusedIterator for Process<'_> {}

/// Data fragments of a run, see [`SourceGenerator::fragments`].
#[derive(Debug)]
pub struct Fragments<'s> {
    process: Process<'s>,
}

impl<'s> Iterator for Fragments<'s> {
    type Item = Result<Cow<'s, str>, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.process.next()? {
                Event::Start => {}
                Event::Data(fragment) => return Some(Ok(fragment)),
                Event::End => return None,
                Event::Error(err) => return Some(Err(err)),
            }
        }
    }
}

impl FusedIterator for Fragments<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use luagen_syntax::ast::*;

    fn do_break() -> Statement {
        Statement::Do(Chunk::new(vec![Statement::Break]))
    }

    // ========================================
    // Lifecycle tests
    // ========================================

    #[test]
    fn test_events_start_data_end() {
        let statement = Statement::Break;
        let generator = SourceGenerator::new(&statement);
        let events: Vec<_> = generator.process().collect();
        assert_eq!(
            events,
            vec![Event::Start, Event::Data(Cow::Borrowed("break")), Event::End]
        );
    }

    #[test]
    fn test_empty_root_chunk_has_no_data() {
        let chunk = Chunk::default();
        let generator = SourceGenerator::new(&chunk);
        let events: Vec<_> = generator.process().collect();
        assert_eq!(events, vec![Event::Start, Event::End]);
        assert_eq!(generator.generate().unwrap(), "");
    }

    #[test]
    fn test_error_is_terminal() {
        let statement = Statement::Local(LocalStatement {
            names: vec![Name::new("ok"), Name::new("local")].into(),
            expressions: None,
        });
        let generator = SourceGenerator::new(&statement);
        let mut process = generator.process();
        assert_eq!(process.next(), Some(Event::Start));

        let rest: Vec<_> = process.by_ref().collect();
        assert!(matches!(rest.last(), Some(Event::Error(err)) if err.kind() == "Name"));
        assert!(!rest.contains(&Event::End));
        assert_eq!(process.next(), None);
    }

    #[test]
    fn test_process_is_fused_after_end() {
        let statement = Statement::Break;
        let generator = SourceGenerator::new(&statement);
        let mut process = generator.process();
        while process.next().is_some() {}
        assert_eq!(process.next(), None);
        assert_eq!(process.next(), None);
    }

    // ========================================
    // Fragment stream tests
    // ========================================

    #[test]
    fn test_fragments_concatenate_to_generate() {
        let statement = do_break();
        let generator = SourceGenerator::new(&statement);
        let joined: String = generator.fragments().map(|f| f.unwrap()).collect();
        assert_eq!(joined, generator.generate().unwrap());
    }

    #[test]
    fn test_fragments_end_with_single_error() {
        let expr = Expression::number("", 0.0);
        let generator = SourceGenerator::new(&expr);
        let items: Vec<_> = generator.fragments().collect();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_err());
    }

    #[test]
    fn test_generate_discards_partial_output() {
        let chunk = Chunk::new(vec![
            Statement::Break,
            Statement::Call(FunctionCall::normal(
                PrefixExpression::name("nil"),
                Arguments::ExpressionList(ExpressionList::default()),
            )),
        ]);
        let err = SourceGenerator::new(&chunk).generate().unwrap_err();
        assert_eq!(err.kind(), "Name");
    }

    #[test]
    fn test_fragments_are_pulled_lazily() {
        // Only the first statement is expanded when the first fragment is pulled.
        let chunk = Chunk::new(vec![
            Statement::Break,
            Statement::Return(vec![Expression::number("", 0.0)].into()),
        ]);
        let generator = SourceGenerator::new(&chunk);
        let mut fragments = generator.fragments();
        assert_eq!(fragments.next(), Some(Ok(Cow::Borrowed("\n"))));
        assert_eq!(fragments.next(), Some(Ok(Cow::Borrowed("break"))));
        assert_eq!(fragments.next(), Some(Ok(Cow::Borrowed("\n"))));
        assert!(matches!(fragments.next(), Some(Ok(_))));
        assert!(matches!(fragments.next(), Some(Ok(_))));
        assert!(matches!(fragments.next(), Some(Err(_))));
        assert_eq!(fragments.next(), None);
    }

    // ========================================
    // Re-running
    // ========================================

    #[test]
    fn test_runs_are_independent() {
        let statement = do_break();
        let generator = SourceGenerator::new(&statement);
        let first = generator.generate().unwrap();
        let second = generator.generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_is_applied() {
        let statement = do_break();
        let config = GenerateConfig::new().with_new_line("\r\n").with_indent("\t");
        let generator = SourceGenerator::with_config(&statement, config.clone());
        assert_eq!(generator.config(), &config);
        assert_eq!(generator.generate().unwrap(), "do\r\n\tbreak\r\nend");
    }
}

//! Chunked row-to-graph mapping.
//!
//! The pipeline pulls rows from a streaming resource, hands each one to a
//! [`RowMapper`], and yields the accumulated graphs as chunks. Nothing is
//! read from the resource until the caller pulls a chunk, and at most one
//! chunk of triples is held in memory at a time.
//!
//! # Design
//!
//! - Chunk boundaries are row-count based: with `chunk_size = Some(n)` a
//!   chunk closes after every `n`-th mapped row; `None` means one graph for
//!   the whole resource, emitted even when the resource has no data rows.
//! - Each chunk is seeded with the statements every chunk must carry
//!   (dataset type assertion, base IRI, prefixes) so chunks are
//!   independently loadable.
//! - Mapper and stream failures are fatal: the iterator yields the error
//!   once and fuses. Data-quality problems are validation's concern, not
//!   this pipeline's.

use std::sync::Arc;

use abis_graph_ir::{Graph, Term as Node};
use abis_tabular::{extra_fields_schema, CsvResource, Row, Rows, Schema};
use abis_vocab::{rdf, tern};
use tracing::{debug, info};

use crate::context::MappingContext;
use crate::error::{MappingError, Result};

/// Maps one typed row into graph statements.
///
/// Implementations append to `graph` and may mint vocabulary terms through
/// `ctx`. A returned error aborts the whole run.
pub trait RowMapper {
    fn map_row(&self, row: &Row, ctx: &mut MappingContext, graph: &mut Graph) -> Result<()>;
}

impl<F> RowMapper for F
where
    F: Fn(&Row, &mut MappingContext, &mut Graph) -> Result<()>,
{
    fn map_row(&self, row: &Row, ctx: &mut MappingContext, graph: &mut Graph) -> Result<()> {
        self(row, ctx, graph)
    }
}

/// A template's mapping pipeline: declared schema plus row mapper.
pub struct MappingPipeline<M> {
    declared: Arc<Schema>,
    mapper: M,
}

impl<M: RowMapper> MappingPipeline<M> {
    /// Create a pipeline for a template schema.
    pub fn new(declared: Arc<Schema>, mapper: M) -> Self {
        Self { declared, mapper }
    }

    /// Map a resource into lazily-produced graph chunks.
    ///
    /// Resolves the resource's headers against the declared schema first,
    /// so the mapper sees both declared and extra columns. `Some(0)` is a
    /// configuration error, rejected before any data is read.
    pub fn apply_mapping(
        self,
        resource: CsvResource,
        chunk_size: Option<usize>,
        mut ctx: MappingContext,
    ) -> Result<GraphChunks<M>> {
        if chunk_size == Some(0) {
            return Err(MappingError::ChunkSize);
        }

        let headers = resource.headers().to_vec();
        let full = Arc::new(extra_fields_schema(&self.declared, &headers, true));
        let extra = Arc::new(extra_fields_schema(&self.declared, &headers, false));
        debug!(
            declared = self.declared.num_fields(),
            extra = extra.num_fields(),
            "resolved resource schema"
        );
        ctx.set_extra_schema(extra);

        info!(
            dataset = ctx.dataset_iri(),
            chunk_size = ?chunk_size,
            "starting mapping run"
        );
        Ok(GraphChunks {
            rows: resource.rows(full),
            mapper: self.mapper,
            ctx,
            chunk_size,
            current: None,
            rows_in_chunk: 0,
            yielded_any: false,
            done: false,
        })
    }
}

/// A fresh chunk graph carrying the statements every chunk must repeat.
fn seed_chunk(ctx: &MappingContext) -> Graph {
    let mut graph = Graph::with_base(ctx.namespace().base());
    graph.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
    graph.add_prefix("skos", "http://www.w3.org/2004/02/skos/core#");
    graph.add_prefix("dcterms", "http://purl.org/dc/terms/");
    graph.add_prefix("tern", "https://w3id.org/tern/ontologies/tern/");
    graph.add_triple(
        Node::iri(ctx.dataset_iri()),
        Node::iri(rdf::TYPE),
        Node::iri(tern::DATASET),
    );
    graph
}

/// Lazy iterator of graph chunks over one mapping run.
///
/// Fused after the first `Err` item or after the final chunk.
pub struct GraphChunks<M> {
    rows: Rows,
    mapper: M,
    ctx: MappingContext,
    chunk_size: Option<usize>,
    current: Option<Graph>,
    rows_in_chunk: usize,
    yielded_any: bool,
    done: bool,
}

impl<M> GraphChunks<M> {
    fn finish_chunk(&mut self) -> Graph {
        self.rows_in_chunk = 0;
        self.yielded_any = true;
        let mut chunk = match self.current.take() {
            Some(chunk) => chunk,
            None => seed_chunk(&self.ctx),
        };
        chunk.canonicalize();
        chunk
    }
}

impl<M: RowMapper> Iterator for GraphChunks<M> {
    type Item = Result<Graph>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let parsed = match self.rows.next() {
                Some(Ok(parsed)) => parsed,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
                None => {
                    self.done = true;
                    // Final partial chunk, or the single whole-resource
                    // graph when unchunked (seeded even for an empty
                    // resource).
                    if self.rows_in_chunk > 0
                        || (self.chunk_size.is_none() && !self.yielded_any)
                    {
                        return Some(Ok(self.finish_chunk()));
                    }
                    return None;
                }
            };

            let graph = self.current.get_or_insert_with(|| seed_chunk(&self.ctx));
            if let Err(e) = self.mapper.map_row(&parsed.row, &mut self.ctx, graph) {
                self.done = true;
                let e = match e {
                    e @ MappingError::RowMapping { .. } => e,
                    other => MappingError::RowMapping {
                        line: parsed.row.line(),
                        message: other.to_string(),
                    },
                };
                return Some(Err(e));
            }
            self.rows_in_chunk += 1;

            if let Some(n) = self.chunk_size {
                if self.rows_in_chunk == n {
                    return Some(Ok(self.finish_chunk()));
                }
            }
        }
    }
}

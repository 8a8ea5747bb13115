extern crate dot;

use std::io;
use std::io::Write;

use crate::expression::Expression;

/// Flattened formula tree that can be rendered as a GraphViz digraph.
pub struct SymbolicParseTree {
    pub nodes: Vec<Expression>,
    edges: Vec<GraphEdge>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl SymbolicParseTree {
    pub fn new(src: &Expression) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        };
        tree.add_recursive(src);
        tree
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    // pre-order numbering; identical subtrees get distinct nodes
    fn add_recursive(&mut self, node: &Expression) -> GraphNode {
        let id = self.nodes.len();
        self.nodes.push(node.clone());

        match node {
            Expression::BinaryOp(_, l, r) => {
                let left = self.add_recursive(l);
                self.edges.push((id, "L".to_string(), left));
                let right = self.add_recursive(r);
                self.edges.push((id, "R".to_string(), right));
            }
            Expression::Not(f) => {
                let child = self.add_recursive(f);
                self.edges.push((id, String::new(), child));
            }
            Expression::Terminal(_) | Expression::Constant(_) => {}
        }

        id
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for SymbolicParseTree {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("parse_tree").expect("cannot create Id named 'parse_tree'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        dot::LabelText::label(self.nodes[*n].label())
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for SymbolicParseTree {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        self.edges.clone().into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}

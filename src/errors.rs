use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    VertexCount(String), // count line missing, non-numeric, or outside 1..=26
    Edge(String), // edge description with the wrong token count or a bad weight
    EndpointOutOfRange(String), // edge names a vertex beyond the declared count
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    InvalidVertex(char), // start or end vertex outside the declared range
    Unreachable(char), // every path to the end vertex is exhausted
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::VertexCount(line) => {
                write!(f, "bad vertex count line: '{}'", line)
            }
            ParseError::Edge(description) => {
                write!(f, "malformed edge description: '{}'", description)
            }
            ParseError::EndpointOutOfRange(description) => {
                write!(f, "edge endpoint outside the declared vertices: '{}'", description)
            }
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidVertex(vertex) => {
                write!(f, "vertex '{}' is not declared by the graph", vertex)
            }
            PathError::Unreachable(vertex) => {
                write!(f, "vertex '{}' is unreachable from the start", vertex)
            }
        }
    }
}

impl std::error::Error for ParseError {}
impl std::error::Error for PathError {}

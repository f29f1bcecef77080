//! End-to-end checks of the scanning pipeline with every network edge replaced
//! by a double or a local mock server.

#[cfg(test)]
mod util;

#[cfg(test)]
mod pipeline;

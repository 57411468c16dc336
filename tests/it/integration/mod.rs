//! Integration tests - gesture core driven end to end.

mod http_sink_tests;

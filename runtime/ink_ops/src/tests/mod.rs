//! End-to-end tests through the dispatcher and operation handles.

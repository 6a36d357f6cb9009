//! Destination for scanned tokens.
//!
//! [`tokenize_into`](crate::tokenize_into) pushes tokens one at a time into
//! any [`TokenSink`], so callers can stream, filter, or count without the
//! scanner knowing what happens to its output.

use crate::{Token, TokenList};

/// Receives tokens in source order.
pub trait TokenSink {
    fn push(&mut self, token: Token);
}

impl TokenSink for Vec<Token> {
    #[inline]
    fn push(&mut self, token: Token) {
        Vec::push(self, token);
    }
}

impl TokenSink for TokenList {
    #[inline]
    fn push(&mut self, token: Token) {
        TokenList::push(self, token);
    }
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    #[inline]
    fn push(&mut self, token: Token) {
        (**self).push(token);
    }
}

use bytes::Bytes;
use hyper::body::{Body, Frame, SizeHint};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::{cmp, convert::Infallible};

/// Response body holding the complete payload up front.
///
/// Files are read whole before the response is built, so the body is a single
/// buffer and the size hint is exact, which lets hyper emit `Content-Length`.
pub struct BytesBody(Bytes);

impl From<Vec<u8>> for BytesBody {
    fn from(contents: Vec<u8>) -> Self {
        Self(Bytes::from(contents))
    }
}

impl From<&'static str> for BytesBody {
    fn from(page: &'static str) -> Self {
        Self(Bytes::from_static(page.as_bytes()))
    }
}

impl Body for BytesBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        _: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        if self.0.is_empty() {
            return Poll::Ready(None);
        }

        // windows/linux can't handle write calls bigger than this
        let chunk_size = i32::MAX as usize;
        let bytes_to_read = cmp::min(self.0.len(), chunk_size);
        let read = self.0.split_to(bytes_to_read);

        Poll::Ready(Some(Ok(Frame::data(read))))
    }

    fn is_end_stream(&self) -> bool {
        self.0.is_empty()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::with_exact(self.0.len() as u64)
    }
}

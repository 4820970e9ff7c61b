//! Carousel messages.

use folio_core::CarouselSlot;

/// Messages targeting one carousel.
#[derive(Debug, Clone, Copy)]
pub enum CarouselMessage {
    Next(CarouselSlot),
    Previous(CarouselSlot),
    /// Dot indicator pressed
    GoTo(CarouselSlot, usize),

    // =========================================================================
    // Pointer
    // =========================================================================
    PointerEntered(CarouselSlot),
    PointerExited(CarouselSlot),
    /// Horizontal pointer position inside the carousel
    PointerMoved(CarouselSlot, f32),
    PointerPressed(CarouselSlot),
    PointerReleased(CarouselSlot),
}

/// Fixed presentation palette, cyclically reused. A person's color is their
/// ordinal position in the registry modulo the palette length, so identical
/// positions keep identical colors across add/remove.
pub const PERSON_PALETTE: [&str; 8] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];

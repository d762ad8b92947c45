//! Constant tables for the shared-key scramble.
//!
//! The inverse S-box, inverse shift-rows permutation and GF(2^8)
//! multiple tables are the standard AES ones; the two XOR tables and
//! the final key XOR table are fixed constants of the target transport.

pub(crate) const SBOX_INV: [u8; 256] = [
    0x52, 0x09, 0x6A, 0xD5, 0x30, 0x36, 0xA5, 0x38, 0xBF, 0x40, 0xA3, 0x9E, 0x81, 0xF3, 0xD7, 0xFB,
    0x7C, 0xE3, 0x39, 0x82, 0x9B, 0x2F, 0xFF, 0x87, 0x34, 0x8E, 0x43, 0x44, 0xC4, 0xDE, 0xE9, 0xCB,
    0x54, 0x7B, 0x94, 0x32, 0xA6, 0xC2, 0x23, 0x3D, 0xEE, 0x4C, 0x95, 0x0B, 0x42, 0xFA, 0xC3, 0x4E,
    0x08, 0x2E, 0xA1, 0x66, 0x28, 0xD9, 0x24, 0xB2, 0x76, 0x5B, 0xA2, 0x49, 0x6D, 0x8B, 0xD1, 0x25,
    0x72, 0xF8, 0xF6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xD4, 0xA4, 0x5C, 0xCC, 0x5D, 0x65, 0xB6, 0x92,
    0x6C, 0x70, 0x48, 0x50, 0xFD, 0xED, 0xB9, 0xDA, 0x5E, 0x15, 0x46, 0x57, 0xA7, 0x8D, 0x9D, 0x84,
    0x90, 0xD8, 0xAB, 0x00, 0x8C, 0xBC, 0xD3, 0x0A, 0xF7, 0xE4, 0x58, 0x05, 0xB8, 0xB3, 0x45, 0x06,
    0xD0, 0x2C, 0x1E, 0x8F, 0xCA, 0x3F, 0x0F, 0x02, 0xC1, 0xAF, 0xBD, 0x03, 0x01, 0x13, 0x8A, 0x6B,
    0x3A, 0x91, 0x11, 0x41, 0x4F, 0x67, 0xDC, 0xEA, 0x97, 0xF2, 0xCF, 0xCE, 0xF0, 0xB4, 0xE6, 0x73,
    0x96, 0xAC, 0x74, 0x22, 0xE7, 0xAD, 0x35, 0x85, 0xE2, 0xF9, 0x37, 0xE8, 0x1C, 0x75, 0xDF, 0x6E,
    0x47, 0xF1, 0x1A, 0x71, 0x1D, 0x29, 0xC5, 0x89, 0x6F, 0xB7, 0x62, 0x0E, 0xAA, 0x18, 0xBE, 0x1B,
    0xFC, 0x56, 0x3E, 0x4B, 0xC6, 0xD2, 0x79, 0x20, 0x9A, 0xDB, 0xC0, 0xFE, 0x78, 0xCD, 0x5A, 0xF4,
    0x1F, 0xDD, 0xA8, 0x33, 0x88, 0x07, 0xC7, 0x31, 0xB1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xEC, 0x5F,
    0x60, 0x51, 0x7F, 0xA9, 0x19, 0xB5, 0x4A, 0x0D, 0x2D, 0xE5, 0x7A, 0x9F, 0x93, 0xC9, 0x9C, 0xEF,
    0xA0, 0xE0, 0x3B, 0x4D, 0xAE, 0x2A, 0xF5, 0xB0, 0xC8, 0xEB, 0xBB, 0x3C, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2B, 0x04, 0x7E, 0xBA, 0x77, 0xD6, 0x26, 0xE1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0C, 0x7D,
];

pub(crate) const SHIFT_ROWS_INV: [u8; 16] = [
    0x00, 0x0D, 0x0A, 0x07, 0x04, 0x01, 0x0E, 0x0B, 0x08, 0x05, 0x02, 0x0F, 0x0C, 0x09, 0x06, 0x03,
];

pub(crate) const GMUL_9: [u8; 256] = [
    0x00, 0x09, 0x12, 0x1B, 0x24, 0x2D, 0x36, 0x3F, 0x48, 0x41, 0x5A, 0x53, 0x6C, 0x65, 0x7E, 0x77,
    0x90, 0x99, 0x82, 0x8B, 0xB4, 0xBD, 0xA6, 0xAF, 0xD8, 0xD1, 0xCA, 0xC3, 0xFC, 0xF5, 0xEE, 0xE7,
    0x3B, 0x32, 0x29, 0x20, 0x1F, 0x16, 0x0D, 0x04, 0x73, 0x7A, 0x61, 0x68, 0x57, 0x5E, 0x45, 0x4C,
    0xAB, 0xA2, 0xB9, 0xB0, 0x8F, 0x86, 0x9D, 0x94, 0xE3, 0xEA, 0xF1, 0xF8, 0xC7, 0xCE, 0xD5, 0xDC,
    0x76, 0x7F, 0x64, 0x6D, 0x52, 0x5B, 0x40, 0x49, 0x3E, 0x37, 0x2C, 0x25, 0x1A, 0x13, 0x08, 0x01,
    0xE6, 0xEF, 0xF4, 0xFD, 0xC2, 0xCB, 0xD0, 0xD9, 0xAE, 0xA7, 0xBC, 0xB5, 0x8A, 0x83, 0x98, 0x91,
    0x4D, 0x44, 0x5F, 0x56, 0x69, 0x60, 0x7B, 0x72, 0x05, 0x0C, 0x17, 0x1E, 0x21, 0x28, 0x33, 0x3A,
    0xDD, 0xD4, 0xCF, 0xC6, 0xF9, 0xF0, 0xEB, 0xE2, 0x95, 0x9C, 0x87, 0x8E, 0xB1, 0xB8, 0xA3, 0xAA,
    0xEC, 0xE5, 0xFE, 0xF7, 0xC8, 0xC1, 0xDA, 0xD3, 0xA4, 0xAD, 0xB6, 0xBF, 0x80, 0x89, 0x92, 0x9B,
    0x7C, 0x75, 0x6E, 0x67, 0x58, 0x51, 0x4A, 0x43, 0x34, 0x3D, 0x26, 0x2F, 0x10, 0x19, 0x02, 0x0B,
    0xD7, 0xDE, 0xC5, 0xCC, 0xF3, 0xFA, 0xE1, 0xE8, 0x9F, 0x96, 0x8D, 0x84, 0xBB, 0xB2, 0xA9, 0xA0,
    0x47, 0x4E, 0x55, 0x5C, 0x63, 0x6A, 0x71, 0x78, 0x0F, 0x06, 0x1D, 0x14, 0x2B, 0x22, 0x39, 0x30,
    0x9A, 0x93, 0x88, 0x81, 0xBE, 0xB7, 0xAC, 0xA5, 0xD2, 0xDB, 0xC0, 0xC9, 0xF6, 0xFF, 0xE4, 0xED,
    0x0A, 0x03, 0x18, 0x11, 0x2E, 0x27, 0x3C, 0x35, 0x42, 0x4B, 0x50, 0x59, 0x66, 0x6F, 0x74, 0x7D,
    0xA1, 0xA8, 0xB3, 0xBA, 0x85, 0x8C, 0x97, 0x9E, 0xE9, 0xE0, 0xFB, 0xF2, 0xCD, 0xC4, 0xDF, 0xD6,
    0x31, 0x38, 0x23, 0x2A, 0x15, 0x1C, 0x07, 0x0E, 0x79, 0x70, 0x6B, 0x62, 0x5D, 0x54, 0x4F, 0x46,
];

pub(crate) const GMUL_11: [u8; 256] = [
    0x00, 0x0B, 0x16, 0x1D, 0x2C, 0x27, 0x3A, 0x31, 0x58, 0x53, 0x4E, 0x45, 0x74, 0x7F, 0x62, 0x69,
    0xB0, 0xBB, 0xA6, 0xAD, 0x9C, 0x97, 0x8A, 0x81, 0xE8, 0xE3, 0xFE, 0xF5, 0xC4, 0xCF, 0xD2, 0xD9,
    0x7B, 0x70, 0x6D, 0x66, 0x57, 0x5C, 0x41, 0x4A, 0x23, 0x28, 0x35, 0x3E, 0x0F, 0x04, 0x19, 0x12,
    0xCB, 0xC0, 0xDD, 0xD6, 0xE7, 0xEC, 0xF1, 0xFA, 0x93, 0x98, 0x85, 0x8E, 0xBF, 0xB4, 0xA9, 0xA2,
    0xF6, 0xFD, 0xE0, 0xEB, 0xDA, 0xD1, 0xCC, 0xC7, 0xAE, 0xA5, 0xB8, 0xB3, 0x82, 0x89, 0x94, 0x9F,
    0x46, 0x4D, 0x50, 0x5B, 0x6A, 0x61, 0x7C, 0x77, 0x1E, 0x15, 0x08, 0x03, 0x32, 0x39, 0x24, 0x2F,
    0x8D, 0x86, 0x9B, 0x90, 0xA1, 0xAA, 0xB7, 0xBC, 0xD5, 0xDE, 0xC3, 0xC8, 0xF9, 0xF2, 0xEF, 0xE4,
    0x3D, 0x36, 0x2B, 0x20, 0x11, 0x1A, 0x07, 0x0C, 0x65, 0x6E, 0x73, 0x78, 0x49, 0x42, 0x5F, 0x54,
    0xF7, 0xFC, 0xE1, 0xEA, 0xDB, 0xD0, 0xCD, 0xC6, 0xAF, 0xA4, 0xB9, 0xB2, 0x83, 0x88, 0x95, 0x9E,
    0x47, 0x4C, 0x51, 0x5A, 0x6B, 0x60, 0x7D, 0x76, 0x1F, 0x14, 0x09, 0x02, 0x33, 0x38, 0x25, 0x2E,
    0x8C, 0x87, 0x9A, 0x91, 0xA0, 0xAB, 0xB6, 0xBD, 0xD4, 0xDF, 0xC2, 0xC9, 0xF8, 0xF3, 0xEE, 0xE5,
    0x3C, 0x37, 0x2A, 0x21, 0x10, 0x1B, 0x06, 0x0D, 0x64, 0x6F, 0x72, 0x79, 0x48, 0x43, 0x5E, 0x55,
    0x01, 0x0A, 0x17, 0x1C, 0x2D, 0x26, 0x3B, 0x30, 0x59, 0x52, 0x4F, 0x44, 0x75, 0x7E, 0x63, 0x68,
    0xB1, 0xBA, 0xA7, 0xAC, 0x9D, 0x96, 0x8B, 0x80, 0xE9, 0xE2, 0xFF, 0xF4, 0xC5, 0xCE, 0xD3, 0xD8,
    0x7A, 0x71, 0x6C, 0x67, 0x56, 0x5D, 0x40, 0x4B, 0x22, 0x29, 0x34, 0x3F, 0x0E, 0x05, 0x18, 0x13,
    0xCA, 0xC1, 0xDC, 0xD7, 0xE6, 0xED, 0xF0, 0xFB, 0x92, 0x99, 0x84, 0x8F, 0xBE, 0xB5, 0xA8, 0xA3,
];

pub(crate) const GMUL_13: [u8; 256] = [
    0x00, 0x0D, 0x1A, 0x17, 0x34, 0x39, 0x2E, 0x23, 0x68, 0x65, 0x72, 0x7F, 0x5C, 0x51, 0x46, 0x4B,
    0xD0, 0xDD, 0xCA, 0xC7, 0xE4, 0xE9, 0xFE, 0xF3, 0xB8, 0xB5, 0xA2, 0xAF, 0x8C, 0x81, 0x96, 0x9B,
    0xBB, 0xB6, 0xA1, 0xAC, 0x8F, 0x82, 0x95, 0x98, 0xD3, 0xDE, 0xC9, 0xC4, 0xE7, 0xEA, 0xFD, 0xF0,
    0x6B, 0x66, 0x71, 0x7C, 0x5F, 0x52, 0x45, 0x48, 0x03, 0x0E, 0x19, 0x14, 0x37, 0x3A, 0x2D, 0x20,
    0x6D, 0x60, 0x77, 0x7A, 0x59, 0x54, 0x43, 0x4E, 0x05, 0x08, 0x1F, 0x12, 0x31, 0x3C, 0x2B, 0x26,
    0xBD, 0xB0, 0xA7, 0xAA, 0x89, 0x84, 0x93, 0x9E, 0xD5, 0xD8, 0xCF, 0xC2, 0xE1, 0xEC, 0xFB, 0xF6,
    0xD6, 0xDB, 0xCC, 0xC1, 0xE2, 0xEF, 0xF8, 0xF5, 0xBE, 0xB3, 0xA4, 0xA9, 0x8A, 0x87, 0x90, 0x9D,
    0x06, 0x0B, 0x1C, 0x11, 0x32, 0x3F, 0x28, 0x25, 0x6E, 0x63, 0x74, 0x79, 0x5A, 0x57, 0x40, 0x4D,
    0xDA, 0xD7, 0xC0, 0xCD, 0xEE, 0xE3, 0xF4, 0xF9, 0xB2, 0xBF, 0xA8, 0xA5, 0x86, 0x8B, 0x9C, 0x91,
    0x0A, 0x07, 0x10, 0x1D, 0x3E, 0x33, 0x24, 0x29, 0x62, 0x6F, 0x78, 0x75, 0x56, 0x5B, 0x4C, 0x41,
    0x61, 0x6C, 0x7B, 0x76, 0x55, 0x58, 0x4F, 0x42, 0x09, 0x04, 0x13, 0x1E, 0x3D, 0x30, 0x27, 0x2A,
    0xB1, 0xBC, 0xAB, 0xA6, 0x85, 0x88, 0x9F, 0x92, 0xD9, 0xD4, 0xC3, 0xCE, 0xED, 0xE0, 0xF7, 0xFA,
    0xB7, 0xBA, 0xAD, 0xA0, 0x83, 0x8E, 0x99, 0x94, 0xDF, 0xD2, 0xC5, 0xC8, 0xEB, 0xE6, 0xF1, 0xFC,
    0x67, 0x6A, 0x7D, 0x70, 0x53, 0x5E, 0x49, 0x44, 0x0F, 0x02, 0x15, 0x18, 0x3B, 0x36, 0x21, 0x2C,
    0x0C, 0x01, 0x16, 0x1B, 0x38, 0x35, 0x22, 0x2F, 0x64, 0x69, 0x7E, 0x73, 0x50, 0x5D, 0x4A, 0x47,
    0xDC, 0xD1, 0xC6, 0xCB, 0xE8, 0xE5, 0xF2, 0xFF, 0xB4, 0xB9, 0xAE, 0xA3, 0x80, 0x8D, 0x9A, 0x97,
];

pub(crate) const GMUL_14: [u8; 256] = [
    0x00, 0x0E, 0x1C, 0x12, 0x38, 0x36, 0x24, 0x2A, 0x70, 0x7E, 0x6C, 0x62, 0x48, 0x46, 0x54, 0x5A,
    0xE0, 0xEE, 0xFC, 0xF2, 0xD8, 0xD6, 0xC4, 0xCA, 0x90, 0x9E, 0x8C, 0x82, 0xA8, 0xA6, 0xB4, 0xBA,
    0xDB, 0xD5, 0xC7, 0xC9, 0xE3, 0xED, 0xFF, 0xF1, 0xAB, 0xA5, 0xB7, 0xB9, 0x93, 0x9D, 0x8F, 0x81,
    0x3B, 0x35, 0x27, 0x29, 0x03, 0x0D, 0x1F, 0x11, 0x4B, 0x45, 0x57, 0x59, 0x73, 0x7D, 0x6F, 0x61,
    0xAD, 0xA3, 0xB1, 0xBF, 0x95, 0x9B, 0x89, 0x87, 0xDD, 0xD3, 0xC1, 0xCF, 0xE5, 0xEB, 0xF9, 0xF7,
    0x4D, 0x43, 0x51, 0x5F, 0x75, 0x7B, 0x69, 0x67, 0x3D, 0x33, 0x21, 0x2F, 0x05, 0x0B, 0x19, 0x17,
    0x76, 0x78, 0x6A, 0x64, 0x4E, 0x40, 0x52, 0x5C, 0x06, 0x08, 0x1A, 0x14, 0x3E, 0x30, 0x22, 0x2C,
    0x96, 0x98, 0x8A, 0x84, 0xAE, 0xA0, 0xB2, 0xBC, 0xE6, 0xE8, 0xFA, 0xF4, 0xDE, 0xD0, 0xC2, 0xCC,
    0x41, 0x4F, 0x5D, 0x53, 0x79, 0x77, 0x65, 0x6B, 0x31, 0x3F, 0x2D, 0x23, 0x09, 0x07, 0x15, 0x1B,
    0xA1, 0xAF, 0xBD, 0xB3, 0x99, 0x97, 0x85, 0x8B, 0xD1, 0xDF, 0xCD, 0xC3, 0xE9, 0xE7, 0xF5, 0xFB,
    0x9A, 0x94, 0x86, 0x88, 0xA2, 0xAC, 0xBE, 0xB0, 0xEA, 0xE4, 0xF6, 0xF8, 0xD2, 0xDC, 0xCE, 0xC0,
    0x7A, 0x74, 0x66, 0x68, 0x42, 0x4C, 0x5E, 0x50, 0x0A, 0x04, 0x16, 0x18, 0x32, 0x3C, 0x2E, 0x20,
    0xEC, 0xE2, 0xF0, 0xFE, 0xD4, 0xDA, 0xC8, 0xC6, 0x9C, 0x92, 0x80, 0x8E, 0xA4, 0xAA, 0xB8, 0xB6,
    0x0C, 0x02, 0x10, 0x1E, 0x34, 0x3A, 0x28, 0x26, 0x7C, 0x72, 0x60, 0x6E, 0x44, 0x4A, 0x58, 0x56,
    0x37, 0x39, 0x2B, 0x25, 0x0F, 0x01, 0x13, 0x1D, 0x47, 0x49, 0x5B, 0x55, 0x7F, 0x71, 0x63, 0x6D,
    0xD7, 0xD9, 0xCB, 0xC5, 0xEF, 0xE1, 0xF3, 0xFD, 0xA7, 0xA9, 0xBB, 0xB5, 0x9F, 0x91, 0x83, 0x8D,
];

pub(crate) const AES_XOR_PAD_0: [u8; 2816] = [
    0x8D, 0x31, 0x11, 0xB1, 0xBF, 0x69, 0xAA, 0x19, 0x73, 0x38, 0x0D, 0xA3, 0xB9, 0xD7, 0x9C, 0x45,
    0x37, 0x10, 0x5A, 0xED, 0xC7, 0xE7, 0x5A, 0x16, 0x20, 0x51, 0x1D, 0x85, 0x4A, 0x0F, 0x83, 0x78,
    0xF6, 0xB5, 0x6F, 0xD1, 0x9F, 0xFD, 0x89, 0x19, 0x06, 0x67, 0x36, 0xDB, 0xB2, 0x95, 0x2A, 0x9C,
    0x7E, 0xB3, 0xEE, 0xC6, 0x93, 0x61, 0xF8, 0x26, 0x9D, 0x24, 0x8F, 0xBB, 0x72, 0x32, 0xB8, 0x68,
    0x4C, 0xC5, 0x36, 0x8E, 0xD7, 0xB6, 0xAC, 0x30, 0x34, 0x76, 0x1E, 0xC6, 0xD2, 0x6E, 0xF3, 0xFB,
    0x7D, 0x29, 0x73, 0x8F, 0x80, 0x35, 0x2B, 0x5A, 0x88, 0xD8, 0xB2, 0xFC, 0xEC, 0x77, 0xDC, 0x7A,
    0x31, 0x45, 0x88, 0x1C, 0xE9, 0xB2, 0xF7, 0xA0, 0xA7, 0x70, 0x9F, 0xF7, 0xC9, 0x58, 0xA1, 0x7B,
    0xDE, 0x77, 0x8E, 0xDD, 0xED, 0x88, 0x38, 0xBA, 0x75, 0x40, 0xC3, 0x17, 0x00, 0x21, 0x69, 0xE8,
    0xAF, 0x4A, 0x7A, 0x70, 0x30, 0x50, 0xEB, 0xAF, 0x82, 0xE9, 0x02, 0xCA, 0x33, 0x56, 0x63, 0xAD,
    0x12, 0x06, 0x30, 0x6F, 0x5C, 0x4E, 0xF5, 0xE7, 0x3F, 0xCB, 0xDB, 0xEF, 0x1B, 0xCB, 0xE4, 0xF1,
    0x2F, 0x35, 0xC2, 0x90, 0x37, 0x29, 0xF9, 0xD2, 0x3D, 0x44, 0xB7, 0xE1, 0x28, 0xDD, 0x8D, 0x00,
    0xDC, 0xF0, 0x8C, 0x3B, 0x3F, 0xF8, 0x19, 0xCA, 0x82, 0xB8, 0x45, 0x8E, 0xF4, 0xAB, 0x73, 0x80,
    0xD1, 0xED, 0x9E, 0xF9, 0x9F, 0x3C, 0xD3, 0xED, 0x06, 0xF5, 0x2D, 0x5C, 0xF7, 0x77, 0x71, 0xE2,
    0x8B, 0x0D, 0x2C, 0x3C, 0x84, 0xF5, 0x51, 0x15, 0x58, 0x79, 0x5A, 0x40, 0x63, 0x12, 0x51, 0x60,
    0xFB, 0x62, 0x0D, 0x8C, 0x9B, 0x39, 0x1D, 0x27, 0xDC, 0xFE, 0x79, 0xB8, 0x9C, 0xAE, 0x26, 0x87,
    0x88, 0x7B, 0x2A, 0x0E, 0x94, 0x9B, 0x4C, 0xC0, 0xA9, 0x18, 0x64, 0x52, 0x99, 0x14, 0x66, 0xB4,
    0xB8, 0x98, 0xAD, 0x0A, 0xD6, 0x30, 0x20, 0xF9, 0x1A, 0x50, 0xC8, 0xD9, 0xAC, 0x87, 0xA7, 0x27,
    0xB3, 0xA5, 0x09, 0x18, 0xC2, 0x51, 0x41, 0xD4, 0x24, 0xED, 0xAB, 0x13, 0x6B, 0x8A, 0xD1, 0xF1,
    0x36, 0x49, 0x31, 0x3A, 0x2B, 0x7B, 0x8D, 0x75, 0xD5, 0x5B, 0x2A, 0xF3, 0x08, 0xE0, 0x48, 0x78,
    0x9A, 0x04, 0x73, 0xE6, 0x04, 0xF8, 0x2C, 0x3E, 0xD3, 0xF0, 0x3D, 0x22, 0x52, 0xC4, 0x01, 0x2E,
    0x17, 0x2A, 0x3B, 0xF2, 0x02, 0x34, 0x9C, 0x7C, 0xC4, 0x73, 0x9D, 0xF0, 0x48, 0x9C, 0x16, 0x0E,
    0x09, 0x57, 0xCC, 0xB6, 0x48, 0x23, 0x03, 0x15, 0x38, 0x97, 0x15, 0xA5, 0xCB, 0xE0, 0xA6, 0x33,
    0xD1, 0x7C, 0x21, 0x71, 0x36, 0x93, 0xF4, 0x42, 0xF3, 0x13, 0xF4, 0xF1, 0xDA, 0x7D, 0x8D, 0x5A,
    0x03, 0x28, 0x04, 0x5B, 0x95, 0x18, 0x15, 0x44, 0x08, 0x8A, 0x50, 0xCF, 0x0D, 0x99, 0x5C, 0x8F,
    0x25, 0x8E, 0x39, 0x2B, 0x5F, 0x96, 0x65, 0x83, 0x98, 0x53, 0x81, 0xAF, 0xA6, 0xC0, 0x00, 0x79,
    0x73, 0x80, 0x31, 0xBC, 0x40, 0x8D, 0x50, 0x63, 0xF2, 0x12, 0x67, 0x20, 0x6A, 0xFA, 0xD4, 0x35,
    0xC6, 0x77, 0x8C, 0x5F, 0x91, 0xCD, 0x16, 0xBD, 0x88, 0xFA, 0xE4, 0xA3, 0x78, 0x92, 0xAB, 0x39,
    0x10, 0x25, 0x5E, 0x42, 0xA7, 0x2D, 0xC4, 0x40, 0xEE, 0x58, 0xD7, 0xA0, 0x9C, 0x68, 0x2F, 0xF5,
    0xB5, 0xD2, 0xC9, 0xB3, 0x8F, 0x87, 0x70, 0x77, 0xED, 0x01, 0x6F, 0x33, 0xE7, 0x17, 0x42, 0x10,
    0x38, 0x93, 0x68, 0x28, 0x83, 0xB6, 0xC8, 0x69, 0x3C, 0x47, 0x0E, 0x89, 0xE9, 0x5F, 0x8E, 0x38,
    0x0D, 0x44, 0xD2, 0x90, 0x71, 0x48, 0x6C, 0xE5, 0x6A, 0xCE, 0x59, 0x8C, 0xA7, 0xC3, 0xE8, 0x6E,
    0x30, 0x89, 0x4F, 0x11, 0x4C, 0x89, 0xAA, 0x9A, 0x45, 0x6F, 0x6F, 0x29, 0x77, 0x2D, 0xF5, 0xC7,
    0xF2, 0xAA, 0x6E, 0x2C, 0xC1, 0xC8, 0x8C, 0x22, 0xB9, 0x4A, 0xF2, 0x76, 0x86, 0x3A, 0xCC, 0xE0,
    0x0E, 0x51, 0x40, 0x8F, 0xAF, 0xDB, 0x7B, 0xDC, 0xEA, 0x5E, 0x7D, 0x66, 0xBE, 0xF6, 0x7B, 0x49,
    0xF8, 0x08, 0x63, 0x07, 0x0A, 0xEC, 0x78, 0x10, 0x03, 0x4E, 0xE1, 0xAA, 0x31, 0x1C, 0x52, 0x78,
    0x9E, 0x50, 0xFC, 0xD3, 0xBF, 0x51, 0x49, 0x23, 0x6D, 0x3B, 0x2D, 0x83, 0xEB, 0xE2, 0xC6, 0x6E,
    0x7A, 0x61, 0x10, 0x40, 0x23, 0x1A, 0x51, 0x94, 0x47, 0x47, 0x9F, 0x82, 0xC3, 0x78, 0xBB, 0x78,
    0x03, 0xB7, 0x6C, 0x68, 0x7A, 0x3E, 0xC1, 0x47, 0xF6, 0x6B, 0xE7, 0xE4, 0x74, 0x44, 0x98, 0x9F,
    0x96, 0x0C, 0x82, 0x38, 0xAE, 0x00, 0xFD, 0x84, 0x9E, 0x0A, 0x7B, 0x2D, 0x8B, 0xD1, 0x8E, 0x59,
    0xD8, 0x60, 0x74, 0xA4, 0xF3, 0xAA, 0x6A, 0x14, 0x23, 0x04, 0x20, 0x3E, 0xF7, 0x0F, 0x80, 0xFD,
    0xB4, 0xE0, 0xC4, 0x98, 0x8A, 0x5D, 0x62, 0xB3, 0x4C, 0x74, 0xF9, 0xB0, 0x1B, 0x6A, 0x60, 0x8A,
    0x85, 0x96, 0xA8, 0xED, 0x2D, 0x30, 0x8D, 0xF2, 0x56, 0xEE, 0x3C, 0x74, 0x95, 0x0E, 0xB2, 0x85,
    0xE4, 0x3F, 0x6C, 0x4D, 0x89, 0xF4, 0xF4, 0x2B, 0xBA, 0xD4, 0x05, 0x02, 0x2A, 0x47, 0x09, 0xEA,
    0xD6, 0x0F, 0x47, 0x46, 0xB2, 0x71, 0x18, 0x7C, 0xB6, 0xBC, 0x83, 0xED, 0x8D, 0x1F, 0x9A, 0xDE,
    0xFB, 0x1A, 0xB3, 0x17, 0x84, 0xD7, 0x20, 0x3D, 0xC5, 0x05, 0xF8, 0xDB, 0x96, 0xF9, 0xCE, 0x9F,
    0x30, 0xDB, 0xCB, 0xDD, 0x9E, 0x96, 0x7E, 0x11, 0xEF, 0x0B, 0x42, 0xF2, 0xBB, 0x32, 0xCD, 0xB4,
    0xBA, 0xC3, 0x15, 0x5B, 0x22, 0xF5, 0xC1, 0xD4, 0xF5, 0xC6, 0x95, 0x2C, 0x2D, 0x1D, 0x0B, 0x43,
    0xFA, 0x2A, 0x58, 0x40, 0x10, 0xA7, 0x29, 0xCB, 0x71, 0x3D, 0x93, 0x33, 0xA9, 0x53, 0xA8, 0x37,
    0xCC, 0x8D, 0xEA, 0xD2, 0x3C, 0x37, 0xC2, 0x29, 0x1C, 0xEB, 0x56, 0xB6, 0xA9, 0xA8, 0x8F, 0xB0,
    0xB9, 0x7C, 0x17, 0x0E, 0x3D, 0xA4, 0xCE, 0x58, 0x14, 0x11, 0x5F, 0x31, 0x48, 0x5D, 0x68, 0xF2,
    0x5A, 0xFD, 0xE6, 0x28, 0xA5, 0x17, 0xB4, 0x1A, 0x4F, 0xE0, 0xE9, 0x07, 0x8E, 0x49, 0x58, 0x3D,
    0xA4, 0x4F, 0x92, 0x4A, 0x73, 0x1D, 0x52, 0x12, 0x62, 0x2A, 0xBC, 0x07, 0xC6, 0xAF, 0xA6, 0x4C,
    0x16, 0xEA, 0x02, 0x32, 0xC2, 0x76, 0xBC, 0xF9, 0x71, 0xD2, 0xC1, 0x01, 0xF4, 0xE8, 0x93, 0x79,
    0xBD, 0x0A, 0x37, 0xF6, 0xBF, 0x30, 0x4D, 0xA5, 0x2B, 0x69, 0x9C, 0x09, 0x83, 0x07, 0x74, 0xD8,
    0x6E, 0x5C, 0xDB, 0x95, 0xD0, 0x11, 0x67, 0x4C, 0xAF, 0x3A, 0x73, 0x70, 0x24, 0x9A, 0x4E, 0x97,
    0xAC, 0x9D, 0x4B, 0x65, 0xD3, 0xC7, 0xA5, 0x5E, 0x31, 0x43, 0xD8, 0x4D, 0x31, 0x66, 0x8F, 0x1D,
    0x24, 0xB7, 0x0C, 0xC8, 0x68, 0xFF, 0xBB, 0xEF, 0x42, 0xC0, 0x37, 0xA4, 0x9F, 0x8A, 0x7D, 0xB1,
    0x39, 0x51, 0xEB, 0xDB, 0xF2, 0xF9, 0xF8, 0xC2, 0x7D, 0x13, 0x0A, 0x73, 0x37, 0xA9, 0xB2, 0xFE,
    0xA7, 0x2A, 0x52, 0x81, 0x2E, 0x7F, 0x5F, 0xAA, 0x1D, 0x26, 0x6B, 0x69, 0x86, 0x1F, 0x26, 0x2D,
    0xD0, 0x50, 0x1B, 0x00, 0x1B, 0xF0, 0x94, 0x8F, 0x0C, 0xCF, 0x2D, 0x96, 0xA0, 0x88, 0x16, 0x76,
    0x7D, 0x74, 0x52, 0x9E, 0x36, 0x8B, 0x24, 0x65, 0xD6, 0x5A, 0xF5, 0x6C, 0x20, 0x92, 0xB0, 0xBA,
    0x26, 0xE4, 0x14, 0xD7, 0x0E, 0x91, 0xD5, 0x1A, 0x67, 0xD9, 0x28, 0xD8, 0xCE, 0x4A, 0x78, 0xAB,
    0xED, 0x92, 0x8C, 0xD5, 0x65, 0xC5, 0x47, 0x36, 0x5F, 0xE3, 0xA4, 0x9B, 0x1C, 0x2A, 0x88, 0x71,
    0x60, 0xB2, 0x4B, 0x06, 0x01, 0x41, 0x5C, 0xC4, 0x53, 0xBC, 0x43, 0x84, 0xC9, 0xAB, 0x74, 0xB6,
    0x37, 0xA0, 0x37, 0x0C, 0x7C, 0x6B, 0xE3, 0x96, 0x6E, 0x17, 0x20, 0x95, 0x0E, 0xE9, 0x0E, 0x27,
    0x56, 0x89, 0xC1, 0xBC, 0x6A, 0x73, 0xE3, 0xA2, 0xBA, 0xA1, 0x7B, 0x62, 0xDC, 0x0D, 0xD8, 0x1A,
    0x47, 0xE1, 0x33, 0x67, 0x18, 0xE9, 0x23, 0x12, 0x5A, 0x20, 0x73, 0xB7, 0x32, 0x0C, 0x5D, 0x8B,
    0x92, 0xE2, 0xCB, 0x79, 0x96, 0x74, 0xE2, 0x74, 0x08, 0xB0, 0x0A, 0x7D, 0x9B, 0xBE, 0x12, 0x6E,
    0xAD, 0x90, 0x9F, 0x66, 0x61, 0x75, 0x78, 0x0A, 0xF8, 0xCE, 0x3F, 0xC4, 0x53, 0xE1, 0x4F, 0xB3,
    0xFE, 0x0A, 0xD1, 0x15, 0x15, 0xD7, 0x6D, 0x27, 0x52, 0x63, 0xFC, 0xE1, 0xDE, 0xCE, 0x0D, 0x55,
    0x02, 0x81, 0x5F, 0xE6, 0x22, 0x5D, 0x98, 0xEE, 0xFD, 0x3D, 0x39, 0xF5, 0x62, 0x44, 0xCA, 0x94,
    0xB0, 0x0A, 0xA8, 0xD2, 0x8B, 0xF3, 0xFE, 0x87, 0x24, 0x4E, 0x4A, 0xF9, 0x67, 0x9D, 0x28, 0xD7,
    0x57, 0x62, 0xB2, 0x7E, 0x01, 0xA4, 0x57, 0xE3, 0x4F, 0xF3, 0x50, 0xD0, 0x33, 0xB5, 0x4C, 0x8E,
    0x86, 0x5C, 0x24, 0xC0, 0x17, 0x02, 0xC9, 0x66, 0x46, 0x07, 0xD9, 0xC4, 0x93, 0xAB, 0x89, 0x58,
    0x0D, 0x35, 0x52, 0xBD, 0x58, 0xC4, 0x60, 0x3B, 0x85, 0xAB, 0x1C, 0x6C, 0xE0, 0xBA, 0xEF, 0x3D,
    0xF7, 0x94, 0xCA, 0xAA, 0x2E, 0x8C, 0x38, 0x7C, 0x4A, 0x00, 0x5B, 0xEC, 0x5D, 0x40, 0x5D, 0x9D,
    0xB5, 0x68, 0xCD, 0xFA, 0xAE, 0x95, 0xCF, 0x0C, 0x3A, 0xB4, 0x87, 0x91, 0xBC, 0xFC, 0x60, 0x5E,
    0xB3, 0xC3, 0x74, 0xF3, 0x66, 0x26, 0xD6, 0x39, 0x7F, 0xE6, 0xDB, 0xA3, 0x8C, 0xEB, 0xC0, 0x5D,
    0x2F, 0xD6, 0x9C, 0x9E, 0x23, 0xA3, 0xEF, 0x04, 0xAE, 0xCC, 0xEA, 0x64, 0xDB, 0xBA, 0x7C, 0x79,
    0x4E, 0xCB, 0x1F, 0xCF, 0x5A, 0x4B, 0x15, 0x4C, 0x1F, 0xDF, 0x09, 0xE4, 0xFF, 0xAA, 0x70, 0x5A,
    0x25, 0x75, 0x60, 0x87, 0xD0, 0x46, 0xC1, 0xD5, 0x47, 0x4E, 0x17, 0x9F, 0x66, 0x9E, 0xFD, 0x41,
    0x25, 0x44, 0x61, 0x74, 0xB8, 0xD9, 0xAF, 0xF8, 0xDD, 0xB9, 0x37, 0x3B, 0x20, 0xC0, 0xFE, 0xE1,
    0xD9, 0xF8, 0xE2, 0x23, 0x5C, 0xE2, 0x3A, 0x2E, 0x46, 0x37, 0xA1, 0x68, 0x19, 0x75, 0xF1, 0x17,
    0xDF, 0x43, 0xC4, 0x1F, 0xF2, 0xC6, 0x52, 0xDA, 0x00, 0x33, 0x7F, 0xBE, 0x00, 0xED, 0x8A, 0x2C,
    0x35, 0xEB, 0xC7, 0x7B, 0x2A, 0x40, 0x15, 0x20, 0x62, 0x5A, 0x2C, 0x1F, 0xB6, 0xBC, 0xDA, 0xE3,
    0xAE, 0x7A, 0x5D, 0x02, 0x53, 0x75, 0x22, 0x63, 0x4B, 0xFE, 0xFA, 0x0A, 0x6F, 0xD9, 0xBB, 0x92,
    0x31, 0x19, 0x21, 0xB7, 0x90, 0x98, 0x87, 0x86, 0x07, 0xAF, 0x62, 0xA2, 0x8B, 0x5A, 0x59, 0x13,
    0x38, 0x92, 0xCC, 0x1F, 0xA5, 0x92, 0x1B, 0xB4, 0x20, 0x2A, 0x3F, 0xD7, 0x0D, 0x82, 0x46, 0x11,
    0xB1, 0xD3, 0xC8, 0x24, 0xDE, 0x1A, 0xD6, 0x81, 0x36, 0xBB, 0x34, 0xC4, 0x24, 0x9A, 0x93, 0xD1,
    0xB0, 0x50, 0x37, 0xE3, 0x3A, 0x71, 0x61, 0xFD, 0x41, 0x28, 0xC2, 0xD2, 0x83, 0xB6, 0x08, 0x44,
    0x71, 0x6F, 0xAB, 0xFD, 0x43, 0x87, 0xD7, 0x87, 0xD0, 0x53, 0x8C, 0x6B, 0xB4, 0x93, 0x3D, 0x7D,
    0x75, 0x05, 0xC7, 0x1C, 0x02, 0xB7, 0x9F, 0x74, 0xC7, 0x2F, 0x65, 0x5C, 0x4E, 0xC3, 0x7D, 0x3C,
    0x39, 0x84, 0xDE, 0x92, 0x91, 0xDD, 0x9B, 0x78, 0x81, 0x6C, 0xB9, 0xCE, 0xC0, 0x9D, 0xD1, 0x3A,
    0x7D, 0xB2, 0xBF, 0x59, 0x04, 0x69, 0x72, 0x17, 0xF0, 0x62, 0xC4, 0x1D, 0xB6, 0x69, 0x70, 0xF9,
    0x12, 0xD5, 0xCA, 0x91, 0x6F, 0x8B, 0xED, 0x8A, 0x93, 0xD2, 0x8B, 0xF9, 0xEC, 0x7C, 0xC4, 0x05,
    0xFF, 0xFA, 0x92, 0x2D, 0x00, 0xF1, 0x13, 0xC3, 0x81, 0x0B, 0x51, 0xCD, 0xFD, 0x0E, 0x09, 0x1A,
    0x97, 0x6C, 0x7C, 0xD5, 0x31, 0x37, 0x26, 0xDC, 0x2B, 0x1C, 0xA7, 0x53, 0x39, 0xDB, 0xA8, 0xA7,
    0x5D, 0x20, 0x89, 0xA8, 0xD0, 0x8B, 0x34, 0x68, 0xF0, 0x17, 0xF2, 0xA5, 0x9B, 0xBB, 0x92, 0xA7,
    0x1D, 0x55, 0x03, 0xE4, 0x79, 0xA8, 0xD8, 0xA9, 0x6D, 0x78, 0x7C, 0xAA, 0x97, 0xC3, 0x39, 0x08,
    0x35, 0x75, 0x54, 0x85, 0xAA, 0xF3, 0x90, 0x23, 0x8D, 0xB5, 0x47, 0xAA, 0x4B, 0x73, 0xD7, 0x8C,
    0x4D, 0x26, 0xFB, 0x7A, 0x92, 0x94, 0xFA, 0xF0, 0xBE, 0xE0, 0x1C, 0x6A, 0x10, 0x1C, 0xB2, 0x96,
    0x60, 0xFD, 0x3F, 0x2F, 0xC3, 0xEF, 0xFA, 0xF0, 0x44, 0xF2, 0x59, 0xA7, 0xE6, 0x40, 0xB7, 0xA6,
    0xA7, 0x95, 0xFC, 0x49, 0x7B, 0xFE, 0xCF, 0xDA, 0xD7, 0xBD, 0xFC, 0x2B, 0x7A, 0x13, 0x40, 0x24,
    0xEA, 0x3C, 0x75, 0xCB, 0x22, 0x07, 0x33, 0xB8, 0x47, 0xBA, 0xFA, 0x83, 0x91, 0x3D, 0x64, 0x3F,
    0xD1, 0x65, 0x9B, 0xBE, 0x5E, 0x21, 0xC2, 0xFC, 0xF5, 0x4B, 0x79, 0xB3, 0xD4, 0x43, 0x1F, 0x64,
    0x46, 0x94, 0x3F, 0xB3, 0x16, 0x32, 0x45, 0x56, 0x85, 0x14, 0x28, 0xA2, 0x99, 0xF9, 0xA7, 0xFE,
    0xA8, 0x4B, 0x94, 0xCA, 0xA0, 0x3C, 0x28, 0xE6, 0xF1, 0x00, 0xD1, 0x00, 0x54, 0xD3, 0xF4, 0xFC,
    0x67, 0x3B, 0x51, 0xF6, 0xE2, 0x5C, 0xEA, 0xC1, 0xD5, 0x7D, 0xD6, 0x52, 0x0E, 0x31, 0x5C, 0x84,
    0x20, 0x56, 0x03, 0x9D, 0xAB, 0x98, 0xC5, 0x8B, 0x32, 0x5F, 0x09, 0xE8, 0xBD, 0x1A, 0x24, 0xB5,
    0x26, 0x0B, 0x4E, 0xF6, 0x2A, 0x0C, 0x5B, 0xA6, 0xB2, 0x49, 0xC9, 0xBC, 0xCD, 0x39, 0xA1, 0xE5,
    0xB8, 0x63, 0xCE, 0x6B, 0x8B, 0xBB, 0x3B, 0x68, 0xFA, 0x7F, 0x31, 0xAD, 0x4F, 0x2F, 0x02, 0x1E,
    0x04, 0xDC, 0xB0, 0x1A, 0xED, 0xE9, 0x6B, 0xF5, 0x45, 0x68, 0x93, 0x8F, 0x92, 0x9A, 0x61, 0x9A,
    0xBB, 0xDC, 0x07, 0xAA, 0x77, 0xAA, 0x1E, 0x06, 0x0E, 0xB3, 0x2E, 0x34, 0x31, 0x3F, 0x99, 0x40,
    0x96, 0xBB, 0x91, 0x1C, 0xD3, 0xBA, 0xB7, 0xDF, 0xA3, 0x29, 0x10, 0x2B, 0x18, 0xA5, 0x23, 0x58,
    0xB7, 0x3B, 0x72, 0xB2, 0x37, 0x51, 0xCF, 0xA2, 0x6D, 0x6C, 0x45, 0xDB, 0x12, 0xB3, 0xCB, 0x2D,
    0xB0, 0x64, 0x9C, 0xF8, 0x48, 0x07, 0xC2, 0x69, 0xE7, 0xAC, 0x2A, 0x35, 0x30, 0xBC, 0xCF, 0xB2,
    0xFD, 0x63, 0x2E, 0x4C, 0xFF, 0x34, 0xBB, 0xDA, 0xDD, 0x25, 0x20, 0x24, 0x34, 0x6E, 0xE0, 0xE4,
    0x86, 0x9A, 0xF8, 0x10, 0x6D, 0xF7, 0x5E, 0x87, 0xF7, 0xFB, 0xFD, 0x82, 0x03, 0x4A, 0x36, 0x0D,
    0x0B, 0x5B, 0x57, 0x84, 0x87, 0x0F, 0x19, 0x9E, 0x5D, 0x93, 0x8F, 0x41, 0xB7, 0x68, 0x63, 0x72,
    0xA9, 0x45, 0xF7, 0xE2, 0x07, 0x64, 0xB4, 0x35, 0x23, 0x31, 0xF8, 0x71, 0x5A, 0x7D, 0x6C, 0x08,
    0x5D, 0x0E, 0xF1, 0x99, 0x21, 0x97, 0x8F, 0xD4, 0xDB, 0x44, 0xE2, 0x18, 0x20, 0x05, 0xAF, 0x27,
    0x2A, 0x38, 0x81, 0xE1, 0x45, 0x78, 0x1C, 0xB7, 0x56, 0xB7, 0x3A, 0x12, 0x56, 0x69, 0x15, 0xE3,
    0x4E, 0x3B, 0x67, 0x01, 0x72, 0x9E, 0x7D, 0x04, 0x72, 0x6A, 0xD7, 0x2D, 0xA4, 0x50, 0x22, 0xFD,
    0xC8, 0xD5, 0x2E, 0x30, 0xB3, 0xB9, 0xCA, 0x22, 0x57, 0xF9, 0x44, 0xB8, 0x03, 0x3A, 0xC1, 0xE0,
    0x80, 0x46, 0x1C, 0x48, 0x1E, 0x33, 0x03, 0xBE, 0x31, 0xFE, 0x36, 0x28, 0x78, 0x74, 0x0F, 0x57,
    0xBF, 0x66, 0x62, 0x83, 0xEA, 0x43, 0x95, 0x12, 0x5F, 0x12, 0x91, 0xAF, 0xF1, 0x52, 0xC6, 0xFC,
    0x5D, 0x94, 0x42, 0x99, 0x27, 0xEA, 0x5B, 0xB8, 0x3C, 0x4B, 0x6F, 0x9E, 0xE4, 0x85, 0xE6, 0x67,
    0xCD, 0x9B, 0x40, 0xC9, 0x7A, 0x2E, 0x45, 0xD9, 0xF6, 0xC0, 0x99, 0x81, 0xEA, 0xED, 0x9D, 0xA5,
    0x33, 0x40, 0xD6, 0x71, 0x38, 0x1D, 0x98, 0x7C, 0xDB, 0xB8, 0xCE, 0x6B, 0xD7, 0x44, 0x2F, 0x16,
    0xDD, 0xD1, 0x91, 0xEA, 0x8F, 0xAB, 0xAA, 0x1B, 0xFE, 0xFE, 0x50, 0x8D, 0x81, 0xF7, 0xBD, 0x47,
    0xF7, 0x6B, 0x81, 0x14, 0x9F, 0x60, 0xAF, 0xCF, 0x99, 0x0F, 0x4A, 0xB3, 0x3D, 0x12, 0xCF, 0x27,
    0x9C, 0x4F, 0xC7, 0x2F, 0x78, 0xC0, 0x63, 0x56, 0x1D, 0x92, 0x14, 0xE0, 0x99, 0x82, 0xA1, 0xB5,
    0xF2, 0x67, 0x6D, 0xA5, 0x54, 0x94, 0x43, 0xAB, 0x85, 0x99, 0x1C, 0x77, 0x9B, 0xB0, 0x5A, 0x92,
    0x59, 0x24, 0xD8, 0xDB, 0x2C, 0x79, 0x13, 0x73, 0xE5, 0xB4, 0x14, 0xE3, 0x3A, 0x16, 0x5A, 0x60,
    0xF4, 0x88, 0x91, 0xA4, 0x09, 0x8E, 0xC6, 0x55, 0x5D, 0x4F, 0xF9, 0x7E, 0x1D, 0x40, 0x6F, 0x75,
    0xCF, 0xB1, 0x4D, 0x7B, 0x80, 0xD7, 0x33, 0xF9, 0x87, 0x82, 0x9F, 0x71, 0xC1, 0xBB, 0x6F, 0x1C,
    0x8E, 0x3E, 0xAD, 0x87, 0xC0, 0x66, 0xC0, 0xF0, 0x30, 0x62, 0x7C, 0xF2, 0xAB, 0xEC, 0xF3, 0x67,
    0x22, 0x82, 0x97, 0x02, 0xFC, 0x39, 0x72, 0xB7, 0x1B, 0x17, 0x63, 0x81, 0xB8, 0xFD, 0x13, 0xF1,
    0xCB, 0x85, 0x66, 0x45, 0x9F, 0x5B, 0x55, 0x0F, 0xED, 0x2C, 0xEC, 0xF5, 0x9F, 0xB8, 0x2D, 0x08,
    0x25, 0x37, 0xEF, 0xE3, 0xD1, 0xC3, 0xE3, 0x05, 0xC3, 0x2E, 0x0E, 0xD6, 0xF4, 0x88, 0x87, 0xF0,
    0x01, 0x9A, 0x24, 0x64, 0x26, 0xFD, 0x71, 0x0D, 0x6C, 0x03, 0x9D, 0x6E, 0x1B, 0x7B, 0x04, 0xAD,
    0xD1, 0x79, 0x2A, 0x63, 0x9B, 0xD3, 0x3A, 0xB8, 0x2F, 0x91, 0x16, 0x0B, 0x51, 0xE1, 0x9C, 0x98,
    0xBA, 0xC5, 0xDC, 0x01, 0xB0, 0x64, 0x1C, 0x81, 0x99, 0x61, 0xFF, 0xB7, 0x8A, 0xDA, 0xBB, 0xC1,
    0xC8, 0x12, 0x52, 0x5D, 0xD1, 0x76, 0xB3, 0xA2, 0x8B, 0x53, 0x12, 0x65, 0x28, 0x3E, 0xF7, 0x7B,
    0x34, 0xAD, 0x3A, 0x62, 0x9E, 0xDF, 0x17, 0x70, 0xBC, 0x3A, 0x79, 0x07, 0x25, 0x93, 0x84, 0x9A,
    0xA8, 0xBA, 0x92, 0x90, 0xDA, 0x19, 0x54, 0x71, 0xC1, 0x99, 0x16, 0x9A, 0xB0, 0xB5, 0x7D, 0xF1,
    0x80, 0x91, 0x22, 0x0D, 0x33, 0x1E, 0x50, 0x76, 0x5A, 0xA6, 0x73, 0x99, 0x06, 0xCA, 0xF8, 0xA4,
    0x59, 0xE1, 0x9D, 0x7B, 0x02, 0xD7, 0x30, 0x56, 0x2A, 0xAE, 0xF9, 0xE5, 0x5B, 0xBB, 0x3C, 0x20,
    0xD8, 0x10, 0x55, 0xD3, 0x8C, 0x6B, 0xC4, 0x0D, 0x1B, 0x5C, 0x89, 0x39, 0xDD, 0x33, 0xE9, 0x9C,
    0x42, 0xED, 0x80, 0x94, 0xC3, 0x0C, 0x65, 0xF7, 0xD0, 0x38, 0xA6, 0x1C, 0xA5, 0xAF, 0x01, 0x8B,
    0xE0, 0x4B, 0x86, 0xF9, 0x89, 0x6C, 0xCD, 0xB6, 0x90, 0xD5, 0x06, 0xEC, 0xFC, 0x56, 0x3E, 0xA7,
    0x30, 0xFE, 0x34, 0x3A, 0xFE, 0x25, 0x25, 0x0D, 0x88, 0x64, 0xC0, 0x14, 0x99, 0x85, 0x02, 0xDB,
    0x17, 0xE4, 0x45, 0xB1, 0x48, 0x41, 0x6D, 0x48, 0xB7, 0x6F, 0x85, 0xC9, 0x45, 0xA7, 0xA7, 0x3D,
    0x32, 0xE8, 0xD4, 0xDF, 0xFB, 0x26, 0xDA, 0x61, 0x90, 0x59, 0x0B, 0x71, 0x09, 0x41, 0xD9, 0xDA,
    0x9B, 0xAE, 0x3A, 0xD9, 0x9D, 0x2F, 0xD4, 0xCC, 0xC5, 0x1A, 0x70, 0xCE, 0xAA, 0x4E, 0xCF, 0x07,
    0x56, 0x9A, 0x80, 0x9D, 0x7C, 0xEB, 0x6B, 0x77, 0xD9, 0x92, 0x9D, 0x77, 0x25, 0x4D, 0x95, 0x81,
    0x95, 0x8C, 0x1D, 0xF8, 0x46, 0x4B, 0x6F, 0x9F, 0x80, 0x72, 0xF5, 0xB8, 0xF7, 0x3A, 0x5C, 0x52,
    0x03, 0x82, 0x10, 0x50, 0x90, 0x42, 0x99, 0x16, 0xDC, 0xE8, 0x57, 0xD3, 0x0C, 0xC2, 0xD6, 0xEE,
    0xE7, 0x97, 0xBA, 0x34, 0x82, 0xA2, 0x96, 0xFE, 0x30, 0x44, 0x67, 0xFC, 0xA8, 0xE0, 0x16, 0x61,
    0xC5, 0x59, 0x6E, 0xA8, 0x20, 0x6C, 0x2A, 0x65, 0xAF, 0xAF, 0x54, 0x94, 0xBB, 0xCA, 0xCE, 0xE0,
    0x08, 0xB2, 0x3E, 0x2F, 0xF0, 0x68, 0xA6, 0x29, 0x3E, 0xD7, 0x28, 0x5B, 0xEB, 0x36, 0x92, 0x35,
    0xCB, 0xDD, 0x4B, 0xD7, 0x97, 0x69, 0x76, 0x49, 0xFB, 0x79, 0xF5, 0x4B, 0x9C, 0xA4, 0x86, 0x37,
    0xFF, 0xF8, 0x85, 0xB9, 0x8E, 0x5C, 0x29, 0x03, 0x76, 0x10, 0x17, 0x6C, 0x14, 0xED, 0xF0, 0x87,
    0x6B, 0x8A, 0x89, 0x64, 0xAC, 0x50, 0xA6, 0x5F, 0x67, 0xC6, 0x26, 0x6A, 0x56, 0x9A, 0x88, 0x8F,
    0xE2, 0x1E, 0x27, 0x6B, 0x1E, 0x12, 0x73, 0xB0, 0x6F, 0x59, 0x6A, 0x25, 0x05, 0xE3, 0x99, 0x35,
    0x1F, 0xF2, 0x5A, 0xC3, 0xB6, 0x6E, 0x6C, 0x4F, 0x96, 0xB7, 0xE0, 0xA2, 0x04, 0x6F, 0xA1, 0xF0,
    0x2F, 0x9C, 0x4B, 0x7B, 0x83, 0x85, 0xA1, 0x6B, 0x00, 0x3C, 0xEC, 0x89, 0x42, 0x83, 0x28, 0x8A,
    0x2D, 0x6F, 0xB9, 0xE4, 0x87, 0x07, 0x7D, 0xB3, 0x9F, 0x1F, 0xC0, 0x5F, 0xFA, 0xDA, 0xDB, 0xAD,
    0xE1, 0xE0, 0x64, 0x34, 0xAD, 0xB4, 0xDF, 0xBB, 0xBB, 0x16, 0x4E, 0x81, 0xF8, 0x89, 0xCC, 0x14,
    0x1F, 0xBE, 0x65, 0xDB, 0xBE, 0x27, 0xF8, 0xB7, 0xE5, 0x60, 0xDB, 0xEF, 0x8A, 0xC1, 0x6E, 0x69,
    0xA1, 0x9A, 0x25, 0x74, 0x21, 0xB8, 0x98, 0xB8, 0xE5, 0xF7, 0x36, 0x59, 0x7A, 0xD8, 0xCE, 0xFF,
    0x3F, 0xF7, 0xCA, 0x17, 0xE9, 0x37, 0xAD, 0x3F, 0x26, 0xFB, 0xFD, 0x05, 0xF8, 0xD9, 0x6C, 0x88,
    0x56, 0xE6, 0x52, 0x55, 0x09, 0x53, 0x01, 0xFC, 0x17, 0xD2, 0xB3, 0xB2, 0x17, 0xD4, 0xA7, 0x61,
    0xC0, 0x42, 0x91, 0xEA, 0xA5, 0xFE, 0x41, 0xFE, 0xB5, 0x3A, 0x95, 0xB5, 0x94, 0xA5, 0x3D, 0x33,
    0x68, 0x53, 0x01, 0x0D, 0xE4, 0x9A, 0x43, 0xD7, 0xDD, 0x45, 0x28, 0xFC, 0x50, 0x77, 0x2D, 0xC3,
    0x85, 0x8C, 0x42, 0xC9, 0x81, 0x54, 0xD3, 0x73, 0xF4, 0x5D, 0x1C, 0xB7, 0xD5, 0x35, 0x0E, 0xBE,
];

pub(crate) const AES_XOR_PAD_1: [u8; 2816] = [
    0xBA, 0xD4, 0xD3, 0xCC, 0x18, 0x0A, 0xA1, 0x94, 0xED, 0x3E, 0xEA, 0xC7, 0x0C, 0xD5, 0x92, 0x50,
    0x92, 0x24, 0x44, 0x23, 0xE0, 0x77, 0x10, 0xBF, 0xBD, 0xC9, 0x32, 0xD3, 0xBD, 0x78, 0xF2, 0x99,
    0x32, 0xB1, 0xDA, 0xCE, 0xE2, 0x26, 0x34, 0x03, 0xB3, 0x5E, 0x30, 0x9D, 0x6A, 0x2D, 0x4A, 0x1E,
    0x3B, 0xB4, 0x2F, 0x5B, 0xC0, 0x1F, 0xB4, 0x22, 0xF3, 0x42, 0xBF, 0x38, 0x0E, 0x11, 0xC9, 0x05,
    0x2A, 0x61, 0x69, 0x56, 0xAF, 0x7B, 0x67, 0x4D, 0x0D, 0x1B, 0x58, 0x06, 0x22, 0xB9, 0xAE, 0x00,
    0x28, 0xE3, 0x83, 0x5A, 0x85, 0x61, 0xF8, 0x3D, 0x03, 0xF5, 0x3C, 0x0D, 0x37, 0x74, 0xE3, 0x7C,
    0xFD, 0xF1, 0xF4, 0xA8, 0xE9, 0x4A, 0x69, 0x52, 0xD6, 0x11, 0xF0, 0x37, 0x94, 0xFE, 0xE5, 0xC6,
    0x29, 0x5D, 0x57, 0x76, 0x1B, 0xBE, 0x9F, 0x6F, 0xDE, 0x7E, 0x85, 0xF1, 0xAD, 0x75, 0xAD, 0x10,
    0xFF, 0xA3, 0x89, 0xD4, 0x10, 0x6D, 0x83, 0xE0, 0xF6, 0x5A, 0xA5, 0xB4, 0xFF, 0x3D, 0x24, 0x07,
    0xFC, 0xDE, 0xB9, 0x6B, 0x68, 0x15, 0xAB, 0xE0, 0xEA, 0x4A, 0x3D, 0xE5, 0x6D, 0xF9, 0x22, 0x1E,
    0x16, 0xDE, 0xEF, 0x2A, 0xD9, 0x72, 0x1C, 0x0C, 0x9A, 0xF0, 0x0F, 0xD9, 0x86, 0x09, 0xC5, 0xD1,
    0xB2, 0xD5, 0x42, 0xA7, 0x90, 0x23, 0x47, 0xC7, 0x87, 0xE3, 0x05, 0xBE, 0xF4, 0x6C, 0xB9, 0xC0,
    0x47, 0xDC, 0x33, 0x35, 0x1B, 0x40, 0x6D, 0xFA, 0xCA, 0xC5, 0x94, 0x81, 0xCB, 0x1D, 0xF6, 0x83,
    0x79, 0x4B, 0xAF, 0xF4, 0x7C, 0x5D, 0xB9, 0xAF, 0xD9, 0xDD, 0x59, 0x41, 0xE2, 0xD1, 0xC2, 0x86,
    0x95, 0x5E, 0xBF, 0x1E, 0x8E, 0x4B, 0xC9, 0x94, 0x8F, 0x1B, 0x7D, 0x7C, 0xD4, 0x68, 0x08, 0xAE,
    0x7A, 0x90, 0x7F, 0x5F, 0x45, 0x54, 0x6C, 0x1E, 0x0F, 0x0F, 0xA8, 0x2F, 0x14, 0xA6, 0x34, 0xBB,
    0x43, 0x82, 0x6B, 0x6B, 0x2D, 0x73, 0x54, 0xC2, 0x63, 0x91, 0x4D, 0x0A, 0x11, 0x64, 0x50, 0xB2,
    0x8D, 0x0E, 0x06, 0xD1, 0x7A, 0xFE, 0x96, 0x0A, 0xDC, 0x42, 0xF5, 0x41, 0x6A, 0x6A, 0xC3, 0x3F,
    0x97, 0x5E, 0xC6, 0xCA, 0x07, 0x40, 0xC7, 0xBD, 0xA3, 0x03, 0x0B, 0xE0, 0x71, 0x64, 0x10, 0x61,
    0x7E, 0xB0, 0xD4, 0x88, 0x3C, 0xE2, 0x8E, 0x60, 0x3C, 0xAC, 0xBD, 0x02, 0x4A, 0x64, 0xC2, 0xFE,
    0xAB, 0x68, 0x14, 0x88, 0xCA, 0x74, 0xED, 0x2B, 0x5F, 0x5E, 0x5A, 0x58, 0x83, 0x44, 0x22, 0x8F,
    0xA4, 0xD0, 0x0E, 0xB6, 0x9C, 0xBB, 0xC0, 0x27, 0x69, 0xF6, 0x3D, 0x13, 0xD0, 0xD1, 0xE5, 0xC4,
    0x28, 0xD6, 0x74, 0xE2, 0xA3, 0xC1, 0xDF, 0xCF, 0x34, 0xF2, 0x8D, 0x83, 0x69, 0x6F, 0x81, 0x61,
    0xB0, 0x4D, 0x82, 0x5B, 0x72, 0x73, 0x33, 0x35, 0xB2, 0x1A, 0xAC, 0x54, 0x06, 0x91, 0x51, 0x8E,
    0x4E, 0xB6, 0x16, 0x96, 0xDA, 0xFA, 0xD5, 0x74, 0x6B, 0x91, 0x70, 0x10, 0x71, 0x14, 0x65, 0xB1,
    0x4E, 0x74, 0x70, 0xD4, 0x5E, 0x71, 0x2C, 0xB1, 0x77, 0x44, 0xFE, 0x36, 0x98, 0xA0, 0xB0, 0xD4,
    0x66, 0x5E, 0x31, 0x64, 0x67, 0x8F, 0xCA, 0xBA, 0x7F, 0xBB, 0xE2, 0xA0, 0x84, 0x60, 0x0F, 0xA2,
    0x08, 0x82, 0x65, 0x35, 0xBB, 0x3D, 0x34, 0x2E, 0x6C, 0x8B, 0xAD, 0x57, 0x00, 0xD5, 0xAB, 0xD6,
    0xA0, 0x42, 0x6F, 0x6D, 0x46, 0x4F, 0x66, 0x93, 0x79, 0x55, 0xD1, 0x05, 0x38, 0x25, 0xBE, 0xEE,
    0xED, 0x6D, 0xDA, 0xEF, 0x66, 0x7C, 0xC9, 0x64, 0x4E, 0x07, 0xB3, 0x1A, 0x59, 0x7E, 0x7F, 0x37,
    0x2F, 0xF9, 0x12, 0xAA, 0xE6, 0xEC, 0x0C, 0x03, 0x43, 0x89, 0x78, 0x22, 0x96, 0x05, 0x73, 0xC8,
    0xEB, 0x0A, 0xD0, 0x66, 0x94, 0x75, 0x5B, 0x1E, 0xB6, 0xFE, 0xF7, 0xE8, 0x95, 0x86, 0x94, 0x4D,
    0x45, 0x07, 0x7B, 0xB4, 0x5F, 0xBB, 0x08, 0xED, 0xD1, 0xD5, 0xF9, 0x7D, 0x0A, 0x12, 0x47, 0x33,
    0x9C, 0x7D, 0x5F, 0xD1, 0xF6, 0x86, 0x2C, 0x92, 0x74, 0x74, 0x70, 0x05, 0xF5, 0x31, 0x85, 0x94,
    0xFF, 0x4F, 0x92, 0x7E, 0x91, 0xF0, 0x3C, 0x27, 0xE8, 0xD9, 0xB1, 0x0F, 0x30, 0x7E, 0x85, 0xB9,
    0xB2, 0x2A, 0x09, 0x57, 0x67, 0xAD, 0xD6, 0x26, 0xAD, 0x9E, 0xAA, 0xE8, 0xB4, 0x8A, 0xFA, 0xA1,
    0x24, 0x09, 0xE3, 0x82, 0xA9, 0x98, 0x1B, 0x7F, 0x3D, 0x35, 0x46, 0x7B, 0x33, 0x9B, 0x48, 0xAC,
    0xE0, 0xC8, 0x39, 0x4F, 0x5A, 0x83, 0xEB, 0xC8, 0x43, 0x5F, 0xB8, 0x98, 0x72, 0xDF, 0xCC, 0x7E,
    0xAE, 0x01, 0x61, 0xCE, 0xD0, 0x49, 0xC9, 0xAA, 0x4C, 0x2E, 0x16, 0xF1, 0xE8, 0xF9, 0x07, 0x2B,
    0x65, 0x6D, 0x0E, 0x7E, 0xF1, 0xD4, 0xEB, 0xA4, 0xAA, 0x30, 0xD5, 0x58, 0x68, 0xE5, 0x36, 0x7E,
    0x7C, 0x08, 0x10, 0xAD, 0x6A, 0xCC, 0xD4, 0x2A, 0xC1, 0xAC, 0x56, 0xA7, 0x7A, 0xD1, 0x59, 0xF7,
    0xA3, 0xC3, 0xC8, 0xD5, 0xCC, 0xE1, 0xF3, 0x55, 0x1A, 0x5A, 0x97, 0x10, 0x19, 0x14, 0xD8, 0x3C,
    0x2C, 0xD6, 0x1F, 0xC5, 0x84, 0x4D, 0xAE, 0x58, 0xCD, 0xA6, 0x2C, 0xBD, 0xA6, 0x29, 0x90, 0xAE,
    0xF4, 0x22, 0x55, 0x25, 0xE2, 0x56, 0xAE, 0x1F, 0x6D, 0xD2, 0x0E, 0x99, 0x43, 0x15, 0x99, 0x53,
    0x10, 0x5E, 0x2B, 0x44, 0x4E, 0x05, 0x8A, 0x5C, 0xCD, 0xA5, 0x50, 0xAF, 0x29, 0x84, 0x2F, 0x43,
    0xF6, 0x50, 0xF4, 0x4A, 0x32, 0x91, 0x7D, 0x3F, 0x37, 0x6C, 0x06, 0x4E, 0x09, 0x02, 0xE2, 0x02,
    0x4D, 0x9B, 0xC2, 0x1C, 0x80, 0xA4, 0x8A, 0xFA, 0x94, 0x99, 0x63, 0xE0, 0x9C, 0x0C, 0x9F, 0x84,
    0x62, 0x5E, 0x86, 0xDA, 0x3D, 0x34, 0x8E, 0xE6, 0x1F, 0x47, 0xEA, 0x4D, 0x06, 0x98, 0x7B, 0xA6,
    0xA6, 0x97, 0x36, 0x19, 0x27, 0xE7, 0xE4, 0x49, 0xEA, 0x06, 0x31, 0xAC, 0x8F, 0x8A, 0x8B, 0xB2,
    0x66, 0x10, 0x7B, 0xB2, 0x66, 0x7D, 0xD2, 0x4D, 0x94, 0x02, 0x78, 0x72, 0xE4, 0x54, 0xE3, 0x26,
    0x8E, 0xCC, 0xD3, 0x44, 0x10, 0xED, 0x18, 0x0A, 0xE2, 0xE1, 0x33, 0x4B, 0x6E, 0xCD, 0xD0, 0x76,
    0xF8, 0x59, 0x35, 0xD1, 0x49, 0xBE, 0xC8, 0xEB, 0x94, 0x8F, 0x99, 0x3A, 0x4F, 0xF0, 0xA3, 0x7F,
    0x93, 0x79, 0xEF, 0xD8, 0xFC, 0x25, 0xF6, 0x7E, 0xCE, 0x46, 0x1F, 0x48, 0xF5, 0x42, 0x3F, 0xC9,
    0x37, 0x4C, 0x26, 0x73, 0xE7, 0x5B, 0xBF, 0xE9, 0xAE, 0x93, 0x12, 0x4B, 0x2A, 0x77, 0xF5, 0xAF,
    0xD7, 0x9A, 0xBC, 0x92, 0xAC, 0x07, 0xE3, 0x44, 0x0D, 0x2B, 0x64, 0x46, 0xAE, 0x56, 0x9B, 0x0F,
    0x2A, 0x75, 0xA8, 0x1C, 0x93, 0x29, 0xDF, 0x3B, 0x3C, 0x2F, 0x4F, 0x07, 0xEC, 0x3B, 0x2E, 0x6B,
    0x0B, 0x64, 0x31, 0x54, 0x95, 0x23, 0x3F, 0xF7, 0xBC, 0xB4, 0x06, 0xF3, 0x25, 0x5C, 0xE2, 0xF4,
    0xCA, 0xA2, 0x2B, 0x4C, 0xA4, 0xA0, 0xEF, 0xEA, 0x23, 0x19, 0xC2, 0xDC, 0x7E, 0xB2, 0x41, 0xA7,
    0x9B, 0x3D, 0x63, 0xDF, 0x39, 0x79, 0x59, 0x04, 0xF3, 0xDC, 0xC1, 0xA6, 0x6F, 0xD6, 0x52, 0x5E,
    0x17, 0x79, 0x15, 0xE9, 0xD1, 0xAA, 0x7F, 0x9F, 0x74, 0xD5, 0xD6, 0x95, 0xC6, 0x36, 0x7F, 0x2B,
    0x7F, 0x7C, 0x57, 0x44, 0x36, 0x52, 0xDD, 0x9A, 0x02, 0xF4, 0x55, 0xC3, 0xC2, 0xA1, 0x93, 0xE6,
    0x1D, 0xF9, 0x85, 0xE1, 0x5A, 0x82, 0x29, 0x9A, 0xB8, 0x0E, 0xBE, 0xB1, 0x42, 0xB0, 0x70, 0xB0,
    0x67, 0xF4, 0xA3, 0xCD, 0x11, 0x43, 0x5A, 0xC8, 0x8F, 0x80, 0xCC, 0xF3, 0x8B, 0xBC, 0xF6, 0x5A,
    0x5D, 0x52, 0x7F, 0xC0, 0x85, 0xD0, 0x92, 0xD8, 0x91, 0xD7, 0x34, 0xFC, 0xB7, 0xB4, 0xE9, 0xE7,
    0xDA, 0xAF, 0x2A, 0x56, 0x0B, 0xB1, 0x43, 0x8C, 0x72, 0xF2, 0xAA, 0x8C, 0x6B, 0x27, 0x05, 0xC9,
    0x2C, 0x78, 0xB8, 0x3F, 0xC4, 0xD0, 0xA2, 0xC9, 0x40, 0x3E, 0x6C, 0x9A, 0xCA, 0x52, 0x0E, 0x2C,
    0xFB, 0x3F, 0x10, 0xFA, 0xD1, 0x68, 0xE5, 0xD7, 0x43, 0xE6, 0x37, 0xCC, 0x0C, 0x62, 0x0A, 0x87,
    0xF1, 0x02, 0x94, 0x3E, 0xD6, 0xAA, 0x96, 0x83, 0x9F, 0x34, 0xE8, 0x37, 0x68, 0x15, 0x70, 0xE5,
    0x0E, 0x84, 0x73, 0x86, 0xB7, 0x2F, 0x51, 0x99, 0xF9, 0xC5, 0xC9, 0x3B, 0x8A, 0x25, 0x86, 0x54,
    0xE4, 0x73, 0xC4, 0x73, 0x56, 0x27, 0xAF, 0xCD, 0xD4, 0x97, 0x60, 0xCB, 0x51, 0xBC, 0x2D, 0xD7,
    0x49, 0xE5, 0x88, 0xE4, 0x8D, 0x13, 0x30, 0xA4, 0xA8, 0xF1, 0xE6, 0x57, 0xA8, 0x70, 0xF2, 0xAD,
    0x8C, 0x19, 0x30, 0xF2, 0x89, 0xA1, 0x4A, 0xEA, 0x4A, 0xC3, 0x61, 0x3F, 0xD0, 0x8F, 0x68, 0x67,
    0x3D, 0x3D, 0x36, 0xDA, 0xA0, 0x8D, 0x76, 0x20, 0xBD, 0x34, 0x04, 0x2A, 0xD0, 0x3D, 0xB7, 0x26,
    0xCD, 0x5B, 0x52, 0xC7, 0xF1, 0x32, 0xA5, 0x01, 0x0A, 0xC0, 0xDA, 0x6C, 0x2E, 0x46, 0x14, 0x39,
    0x71, 0xBC, 0x5E, 0x40, 0xE9, 0x80, 0x28, 0x99, 0xF3, 0xCE, 0x27, 0x1D, 0xC4, 0x60, 0xA6, 0x4B,
    0xF4, 0x56, 0x3C, 0x07, 0xF8, 0x06, 0x54, 0x11, 0xA3, 0x56, 0xF1, 0x34, 0x36, 0x6C, 0x38, 0xD9,
    0xC2, 0x77, 0x3E, 0xDE, 0x75, 0xFD, 0x6E, 0x68, 0x58, 0x53, 0xFB, 0x0B, 0x65, 0x0C, 0x3A, 0x1D,
    0x74, 0x1C, 0x89, 0xE0, 0x62, 0x92, 0x7E, 0xE9, 0x75, 0xA1, 0x5E, 0xBD, 0xDC, 0x46, 0xDA, 0x1C,
    0x25, 0x54, 0x77, 0x41, 0xB1, 0xEB, 0xFD, 0xAB, 0xD2, 0x35, 0xE8, 0xD4, 0x92, 0x38, 0xB7, 0x9D,
    0x95, 0x41, 0x82, 0xA0, 0x24, 0xF8, 0xA8, 0x4B, 0xEE, 0xB4, 0x27, 0xAE, 0xB2, 0x6A, 0xC3, 0x52,
    0xF8, 0x2B, 0xF6, 0x1A, 0xBF, 0x72, 0xF4, 0xF2, 0x20, 0x01, 0x9F, 0xAF, 0xCA, 0xEB, 0xCF, 0x62,
    0x2B, 0x5B, 0x35, 0xD8, 0x0F, 0xBB, 0xC3, 0xAD, 0x82, 0xEA, 0x52, 0x5F, 0x81, 0xE0, 0x57, 0x9C,
    0xD6, 0x8C, 0x77, 0xC4, 0x84, 0xEB, 0xC2, 0x2E, 0xB7, 0x67, 0x95, 0xB1, 0x60, 0xEE, 0xBE, 0x0C,
    0xE7, 0x05, 0x10, 0xC3, 0x15, 0x03, 0x62, 0x39, 0x4D, 0xFC, 0xC7, 0x5B, 0xEC, 0xA8, 0x76, 0x0C,
    0x86, 0xA7, 0x55, 0xE8, 0x84, 0x3F, 0xBD, 0xA2, 0x25, 0x06, 0xA3, 0xFD, 0x39, 0x9A, 0x4B, 0x36,
    0x0A, 0xDE, 0xD4, 0xBB, 0xF6, 0x3B, 0xD3, 0xCE, 0x86, 0x67, 0x81, 0x90, 0xF0, 0x36, 0x47, 0xFD,
    0x4B, 0xEE, 0x85, 0xF4, 0xA9, 0xCE, 0xE8, 0xAF, 0x9F, 0x16, 0x18, 0xC4, 0x7D, 0xF6, 0xB1, 0x4D,
    0x8E, 0x96, 0x54, 0x0C, 0x6A, 0x2C, 0x7F, 0xD8, 0x57, 0x2C, 0x22, 0x1D, 0xC7, 0x5A, 0x84, 0xF9,
    0x97, 0xFE, 0xA5, 0xF4, 0x0B, 0x73, 0xFA, 0xC9, 0xDA, 0x92, 0x44, 0xF2, 0x31, 0x3B, 0xCC, 0x41,
    0x5D, 0x7F, 0xF1, 0x83, 0xFF, 0x8E, 0x65, 0xED, 0xED, 0x2D, 0xFE, 0x54, 0x53, 0xB0, 0x8A, 0xC9,
    0x3F, 0xDC, 0x65, 0x10, 0x5C, 0xBB, 0xBA, 0xC9, 0x71, 0xA2, 0x3A, 0x1E, 0x9A, 0xE6, 0xC0, 0xA8,
    0xDA, 0xC4, 0x29, 0x21, 0x99, 0x65, 0x58, 0x2C, 0xE5, 0x95, 0x65, 0xE8, 0xB7, 0xC4, 0x78, 0xF3,
    0x9E, 0x02, 0xC8, 0x90, 0x9E, 0x76, 0x4B, 0xA2, 0x2F, 0x51, 0xBB, 0x87, 0xAB, 0xD5, 0x3E, 0x41,
    0x13, 0x45, 0xBD, 0xA7, 0x25, 0x8D, 0x02, 0xBD, 0xF1, 0xA0, 0x85, 0x95, 0x6D, 0xDB, 0xB7, 0x76,
    0x11, 0x08, 0xE7, 0x6A, 0x28, 0x26, 0xD6, 0x18, 0xE1, 0xC9, 0x8C, 0x60, 0x50, 0x96, 0xA9, 0x9A,
    0xDC, 0x3D, 0x0E, 0x29, 0xE3, 0x80, 0x18, 0xA1, 0x19, 0xBB, 0x4A, 0x82, 0x7B, 0xEE, 0x03, 0xA8,
    0x58, 0x29, 0xD6, 0xCA, 0x13, 0xA2, 0xA7, 0xF9, 0x17, 0xEC, 0xE6, 0xA7, 0x6C, 0xD7, 0xC2, 0xE3,
    0xF3, 0x3B, 0x85, 0xE3, 0x7B, 0xAD, 0x9F, 0x9D, 0x59, 0xA3, 0x9E, 0xAD, 0xEC, 0xBE, 0x89, 0x9C,
    0xF5, 0x56, 0xD6, 0x82, 0x06, 0x22, 0x87, 0x75, 0x2E, 0x9C, 0x71, 0xBC, 0xF0, 0x43, 0x66, 0x9F,
    0x06, 0xA0, 0xAF, 0x5C, 0x47, 0xB5, 0xE9, 0x02, 0xAF, 0x59, 0x8D, 0x34, 0xEC, 0x96, 0xE4, 0xC8,
    0x7B, 0xBF, 0xA8, 0xFD, 0x47, 0x5A, 0x55, 0xA7, 0x39, 0x2F, 0x8E, 0x3D, 0x8E, 0xC8, 0x03, 0x09,
    0xA0, 0xD0, 0x3E, 0xD2, 0x21, 0xC8, 0x0D, 0xD6, 0x21, 0x1A, 0x77, 0xC1, 0xCD, 0xA9, 0xBD, 0xE5,
    0xB3, 0xD6, 0x2A, 0x48, 0xB9, 0xD5, 0x51, 0x4A, 0xD1, 0xBC, 0x21, 0x61, 0x40, 0xFD, 0x1F, 0x6A,
    0xC0, 0x38, 0xAD, 0x0E, 0x69, 0x51, 0xF5, 0x7E, 0xD9, 0x95, 0x33, 0x73, 0xCC, 0xDD, 0x05, 0x3C,
    0xA0, 0x48, 0x48, 0x13, 0x75, 0x12, 0xB7, 0x35, 0xC0, 0xD6, 0xF5, 0x68, 0x78, 0x7D, 0x39, 0xF0,
    0x1D, 0x60, 0x3A, 0x0B, 0x07, 0xC8, 0xCE, 0xA2, 0xD0, 0xA6, 0x0A, 0x91, 0x0C, 0xCD, 0xEF, 0x98,
    0x5B, 0x0A, 0x74, 0xC7, 0x34, 0x57, 0x5B, 0x97, 0x3E, 0x5F, 0xD6, 0xFD, 0x1D, 0x15, 0x7D, 0x01,
    0x70, 0x14, 0x49, 0x22, 0x27, 0x00, 0x65, 0x4C, 0x13, 0xE7, 0x8E, 0xA5, 0x18, 0x68, 0x6F, 0x95,
    0x50, 0x30, 0x40, 0x27, 0xDA, 0x22, 0xE5, 0xD6, 0xD3, 0x13, 0x3C, 0xF4, 0xF3, 0x2D, 0xA9, 0xD9,
    0x14, 0x11, 0x68, 0xB2, 0x28, 0x27, 0x18, 0x08, 0xF7, 0xAA, 0x7E, 0xE9, 0xBA, 0xEF, 0x91, 0xA2,
    0xA6, 0x60, 0xAA, 0xA5, 0x6A, 0x1A, 0x70, 0x23, 0xEE, 0xE7, 0x01, 0xE9, 0x9A, 0xC2, 0x28, 0x7A,
    0xEB, 0x6D, 0xDC, 0x69, 0xE4, 0xB0, 0x7F, 0x48, 0xAF, 0x37, 0x4E, 0xE2, 0x07, 0x7D, 0x89, 0xF0,
    0x22, 0xB4, 0x0B, 0xC7, 0x14, 0xB0, 0x06, 0xA4, 0x24, 0x4E, 0xD4, 0x33, 0x71, 0x07, 0xF5, 0x1A,
    0x46, 0x6C, 0xF7, 0xC3, 0x77, 0x75, 0x4D, 0x32, 0x65, 0xAA, 0x94, 0x75, 0x95, 0x67, 0xBD, 0x6F,
    0x0B, 0xE0, 0xCB, 0x8F, 0xF3, 0x3A, 0xE5, 0x9A, 0x18, 0x1B, 0x23, 0x2C, 0x4D, 0x39, 0x9F, 0x65,
    0x91, 0x71, 0xA2, 0x21, 0x29, 0x0F, 0x7C, 0x01, 0x15, 0xEC, 0x2A, 0x54, 0x5D, 0x50, 0xB3, 0xAE,
    0xE6, 0x4F, 0x1D, 0xD9, 0x83, 0x37, 0x74, 0xDB, 0xD3, 0x9D, 0xDF, 0xD3, 0xC4, 0x45, 0x0F, 0xAC,
    0xC3, 0x55, 0x53, 0x72, 0xA6, 0xD5, 0xE6, 0x4A, 0xC5, 0xB0, 0x22, 0x39, 0x8B, 0x16, 0xEE, 0xDA,
    0xCD, 0xCC, 0x93, 0x1F, 0x4C, 0x3D, 0x09, 0x81, 0xBA, 0xFB, 0xAE, 0x07, 0xAE, 0x8A, 0x65, 0x33,
    0xD0, 0x55, 0xA3, 0x79, 0x9E, 0xD9, 0x34, 0x4B, 0x67, 0xB7, 0xFD, 0xE2, 0x0F, 0xF0, 0x5F, 0x3E,
    0x89, 0x28, 0x01, 0xAA, 0x81, 0x22, 0xF3, 0x8D, 0xFA, 0xAC, 0xEB, 0xB1, 0xA0, 0xAE, 0x93, 0x93,
    0xC6, 0x45, 0x0D, 0x20, 0xD8, 0x76, 0x92, 0x35, 0x62, 0x0F, 0x72, 0x3D, 0x6C, 0xDB, 0x76, 0x72,
    0xD2, 0xCF, 0x7C, 0x55, 0x6E, 0xB2, 0xCE, 0x3D, 0x1B, 0x53, 0x10, 0xDB, 0x55, 0x86, 0x44, 0x8B,
    0xED, 0x00, 0x77, 0x75, 0xF2, 0x9F, 0x1D, 0xD9, 0x04, 0xFB, 0x62, 0x8F, 0xD1, 0x72, 0xF1, 0x8F,
    0x55, 0xE0, 0xCF, 0xEF, 0xBD, 0xE4, 0xD9, 0x3D, 0xD7, 0xBC, 0x64, 0x8E, 0x7A, 0x24, 0x85, 0xEF,
    0x64, 0xED, 0x4C, 0xA5, 0x09, 0x94, 0xB5, 0xBD, 0x5F, 0x63, 0x5C, 0x87, 0x16, 0x35, 0xC3, 0x1A,
    0x8E, 0xCC, 0x28, 0xE1, 0x2A, 0x6C, 0x1F, 0xF7, 0x92, 0x6C, 0x82, 0xFF, 0x9C, 0xDD, 0xA0, 0x7E,
    0x08, 0x10, 0x74, 0x5C, 0xF8, 0x9B, 0xAA, 0x25, 0x21, 0x9C, 0x0C, 0xC0, 0x55, 0x39, 0x1B, 0x51,
    0xE4, 0x39, 0x2A, 0x30, 0xC6, 0x8D, 0x28, 0x09, 0x7E, 0x37, 0x16, 0x4E, 0x88, 0x95, 0x0D, 0xED,
    0x02, 0x5E, 0x39, 0x1A, 0xB2, 0xF9, 0x9F, 0xE9, 0x18, 0xBE, 0x89, 0x49, 0xCC, 0xF5, 0x84, 0xA9,
    0x39, 0x4D, 0x57, 0x8D, 0x70, 0xD4, 0x51, 0x6F, 0xD8, 0x46, 0x7A, 0x39, 0xD5, 0xEA, 0xAC, 0x1F,
    0x94, 0xA9, 0x0E, 0x41, 0xAA, 0x80, 0xDB, 0xE3, 0x08, 0x53, 0xC5, 0x6A, 0x01, 0x75, 0xDD, 0x45,
    0xED, 0x98, 0x0B, 0x3F, 0xFF, 0x49, 0x84, 0x65, 0xCF, 0x41, 0xEA, 0x5A, 0xF3, 0x79, 0x48, 0x6C,
    0x5E, 0x80, 0x3A, 0x58, 0x90, 0x89, 0x4B, 0xC0, 0x11, 0x96, 0x1E, 0xDA, 0xC3, 0x04, 0x92, 0x50,
    0x50, 0x12, 0xFF, 0xD4, 0xEF, 0xB5, 0xF3, 0x5D, 0x19, 0x26, 0xF0, 0x60, 0x07, 0x10, 0xD8, 0x6A,
    0x62, 0xE0, 0xF5, 0xEB, 0x12, 0xA0, 0xC9, 0x8F, 0x22, 0x5D, 0x72, 0x27, 0x93, 0xCC, 0x4A, 0x6C,
    0xAC, 0x77, 0xAD, 0xD2, 0xA8, 0x15, 0xC8, 0xDE, 0x12, 0xC0, 0xBB, 0x84, 0xC1, 0x66, 0x66, 0x60,
    0xB4, 0xB3, 0x6F, 0x1B, 0x4F, 0xBE, 0xEE, 0xC7, 0xC0, 0x8F, 0x51, 0x19, 0x8C, 0xA6, 0x37, 0x11,
    0x7D, 0xB9, 0x11, 0x61, 0xC9, 0x68, 0xCC, 0x74, 0x7D, 0xAE, 0x08, 0xB2, 0x1C, 0xBB, 0x39, 0x6B,
    0x0C, 0xCD, 0xF4, 0xAF, 0x6A, 0x2C, 0x41, 0x15, 0x29, 0x9E, 0x7A, 0x1C, 0x2B, 0x3B, 0xCE, 0x25,
    0x9D, 0xD1, 0xC3, 0x33, 0xEE, 0xB9, 0xF2, 0xD4, 0x6E, 0x49, 0x4C, 0x99, 0x58, 0xF6, 0x1A, 0xC2,
    0x62, 0x97, 0xC5, 0x86, 0x17, 0x5C, 0xB0, 0x50, 0x5C, 0xAD, 0xEB, 0xBA, 0x20, 0xD8, 0xE4, 0xE3,
    0xDE, 0x5F, 0x7C, 0x06, 0xC8, 0x3F, 0xCC, 0x0B, 0x84, 0x92, 0x73, 0xCD, 0x0D, 0x79, 0xCB, 0xBC,
    0x12, 0x88, 0xC2, 0xBE, 0x7F, 0xD9, 0x25, 0xB3, 0x71, 0x97, 0xAD, 0x1D, 0xF9, 0x34, 0x52, 0x60,
    0x2E, 0x8A, 0xA9, 0xC2, 0x71, 0xC3, 0x07, 0xB0, 0x2A, 0xDD, 0xA2, 0xE5, 0x1D, 0xDF, 0x2C, 0x0D,
    0x02, 0xA3, 0xD6, 0x36, 0xCA, 0xA1, 0x47, 0xB5, 0x21, 0x6D, 0x87, 0x1C, 0x0E, 0xE0, 0xEE, 0x8A,
    0x86, 0xCB, 0xE5, 0xBE, 0x0F, 0x04, 0xE5, 0xFB, 0xF8, 0xB2, 0x08, 0x89, 0x51, 0xDF, 0xA6, 0xE9,
    0x23, 0x28, 0x9C, 0x8A, 0x56, 0x3A, 0x0A, 0x06, 0x80, 0xDA, 0xAE, 0x5B, 0x47, 0xF6, 0x2C, 0xDE,
    0x14, 0xCC, 0xD1, 0x4D, 0x73, 0x14, 0x92, 0x56, 0x35, 0x17, 0xF1, 0x03, 0xDA, 0x8D, 0x72, 0xD0,
    0x6C, 0x8C, 0x7B, 0x6A, 0xA0, 0xD3, 0xED, 0x9D, 0xE4, 0x73, 0x58, 0xF9, 0x44, 0x76, 0x43, 0x11,
    0xBB, 0x70, 0x8F, 0x09, 0x23, 0xE5, 0x9A, 0x46, 0x14, 0x25, 0x01, 0xEA, 0xB3, 0xA1, 0x99, 0x28,
    0x29, 0x3D, 0xDA, 0xD9, 0xF8, 0xD7, 0xE6, 0xB9, 0x2E, 0x5B, 0x6F, 0x64, 0x94, 0xA2, 0x89, 0x9C,
    0x69, 0x06, 0xFE, 0xD9, 0xFD, 0x0F, 0x5C, 0xE3, 0xD3, 0x12, 0xC9, 0xB3, 0x12, 0x5B, 0x8A, 0xE0,
    0x9F, 0xE3, 0x0E, 0x61, 0x9B, 0x33, 0x2C, 0x3E, 0x31, 0xC9, 0x24, 0x2A, 0x42, 0x51, 0xE5, 0x02,
    0xE7, 0x09, 0x8E, 0x64, 0xB8, 0xD1, 0xCE, 0xE0, 0xE2, 0x41, 0x47, 0x27, 0xEC, 0x5E, 0x54, 0x72,
    0xDC, 0x50, 0x93, 0x34, 0x3E, 0x5C, 0x72, 0x61, 0x11, 0xF6, 0x0D, 0x8D, 0xC2, 0x5A, 0xC1, 0xEC,
    0x50, 0x0E, 0x08, 0x80, 0x1B, 0xAB, 0x85, 0xAF, 0xFA, 0xDD, 0xB9, 0x91, 0x46, 0x5B, 0x55, 0x96,
    0xA8, 0xF9, 0x52, 0xDD, 0xCD, 0x90, 0x5E, 0x03, 0x87, 0x49, 0x13, 0xD3, 0xF9, 0x19, 0xA5, 0x37,
    0x84, 0xF8, 0xD6, 0xDC, 0x4C, 0xE8, 0x3C, 0x66, 0x65, 0xB5, 0x63, 0x9D, 0x2B, 0x94, 0xBC, 0x51,
    0xF1, 0x15, 0x50, 0xB1, 0x8B, 0xA2, 0x7E, 0xBE, 0x76, 0xB4, 0x56, 0x97, 0x05, 0x82, 0x73, 0x82,
    0x5A, 0x0D, 0x4E, 0x15, 0x55, 0x9F, 0x8C, 0xCE, 0x40, 0xFD, 0x2E, 0x2F, 0x1B, 0x2F, 0xA9, 0xFD,
    0x32, 0xBF, 0x71, 0x33, 0x88, 0x1E, 0x66, 0x39, 0xD1, 0xD0, 0xD0, 0xF1, 0x7A, 0x56, 0xB2, 0xD8,
    0x9C, 0x43, 0x36, 0xD6, 0xC8, 0xFB, 0x38, 0x48, 0x12, 0x5D, 0x19, 0x6D, 0xAD, 0xE3, 0x71, 0x36,
    0xA7, 0xB6, 0x97, 0x89, 0xB8, 0x3F, 0x65, 0xF3, 0x63, 0x9D, 0x90, 0xEF, 0x61, 0xCD, 0xEC, 0x58,
    0x79, 0xEF, 0xA0, 0xB6, 0x06, 0x86, 0x7F, 0xCC, 0xFC, 0xC6, 0x16, 0x72, 0xB9, 0x0C, 0xD6, 0x08,
    0xE3, 0x41, 0xD0, 0x11, 0xA7, 0x4B, 0x59, 0x40, 0x9A, 0x0B, 0xC2, 0xEA, 0x3C, 0x9D, 0x55, 0xA1,
    0xDC, 0x88, 0x20, 0x1B, 0x31, 0x36, 0xE2, 0xFD, 0x48, 0xF9, 0x52, 0x63, 0xC9, 0x09, 0x07, 0x62,
    0xD8, 0x5E, 0x6A, 0xA6, 0x42, 0xA1, 0xD7, 0x37, 0x3A, 0x4E, 0x1B, 0x53, 0x75, 0xA2, 0x22, 0x03,
    0x19, 0xBD, 0x47, 0x4B, 0x52, 0x14, 0xEA, 0xA7, 0xE3, 0x26, 0x36, 0x4D, 0xCA, 0x28, 0x05, 0xD4,
    0x99, 0x78, 0x17, 0xBE, 0xDC, 0x7F, 0x73, 0x83, 0xB1, 0x89, 0x91, 0x9F, 0xA6, 0x97, 0x6D, 0x9E,
    0x1E, 0xDB, 0x29, 0x35, 0x2D, 0xBB, 0x5F, 0xF8, 0xFA, 0xA3, 0xAE, 0xF2, 0xB3, 0x9F, 0x03, 0x61,
    0x2F, 0x1B, 0x04, 0x3A, 0x68, 0x3F, 0xD9, 0xF4, 0x8A, 0xEB, 0x33, 0xC0, 0xB9, 0x2A, 0x8D, 0x98,
    0xA3, 0xD1, 0xBE, 0xC1, 0x2E, 0x3C, 0x95, 0x84, 0x03, 0x7F, 0x55, 0xB5, 0x3E, 0xE5, 0xFE, 0x7A,
    0xB0, 0xAE, 0xFD, 0xD2, 0x6B, 0x0F, 0xB8, 0x64, 0xB1, 0x4A, 0x93, 0xB5, 0x6D, 0x32, 0xB4, 0xD0,
    0xC7, 0x79, 0xB9, 0xD1, 0xAF, 0x10, 0x8B, 0x64, 0x93, 0xE2, 0xCE, 0x7A, 0x15, 0xDB, 0xD9, 0x7E,
    0x85, 0x2C, 0x17, 0xA4, 0x5D, 0x31, 0x7E, 0x4A, 0x92, 0x55, 0x72, 0xC6, 0x49, 0x03, 0x93, 0x24,
];

pub(crate) const KEY_XOR_PAD: [u8; 16] = [
    0x1D, 0x53, 0x1B, 0xA4, 0x72, 0xF2, 0x41, 0x2D, 0xD5, 0x7D, 0x65, 0x10, 0xAE, 0x12, 0x38, 0xD1,
];

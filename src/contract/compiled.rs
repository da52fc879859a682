//! Bank contract bytecode
//!
//! Every bank contract carries the same runtime code. It is never
//! interpreted: calls to a registered address are intercepted before the
//! EVM runs it, but wallets and explorers still see a contract with the
//! usual ERC-20 interface.

use crate::contract::abi;
use crate::crypto::keccak256;

/// Runtime code installed at every bank contract address
pub const VFBC_RUNTIME_CODE: &[u8] = &[
    0x60, 0x80, 0x60, 0x40, 0x52, 0x34, 0x80, 0x15, 0x61, 0x00, 0x10, 0x57, 0x60, 0x00, 0x80, 0xfd,
    0x5b, 0x50, 0x60, 0x04, 0x36, 0x10, 0x61, 0x00, 0x93, 0x57, 0x60, 0x00, 0x35, 0x60, 0xe0, 0x1c,
    0x80, 0x63, 0x31, 0x3c, 0xe5, 0x67, 0x11, 0x61, 0x00, 0x66, 0x57, 0x80, 0x63, 0x31, 0x3c, 0xe5,
    0x67, 0x14, 0x61, 0x01, 0x34, 0x57, 0x80, 0x63, 0x70, 0xa0, 0x82, 0x31, 0x14, 0x61, 0x01, 0x52,
    0x57, 0x80, 0x63, 0x95, 0xd8, 0x9b, 0x41, 0x14, 0x61, 0x01, 0x82, 0x57, 0x80, 0x63, 0xa9, 0x05,
    0x9c, 0xbb, 0x14, 0x61, 0x01, 0xa0, 0x57, 0x80, 0x63, 0xdd, 0x62, 0xed, 0x3e, 0x14, 0x61, 0x01,
    0xd0, 0x57, 0x61, 0x00, 0x93, 0x56, 0x5b, 0x80, 0x63, 0x06, 0xfd, 0xde, 0x03, 0x14, 0x61, 0x00,
    0x98, 0x57, 0x80, 0x63, 0x09, 0x5e, 0xa7, 0xb3, 0x14, 0x61, 0x00, 0xb6, 0x57, 0x80, 0x63, 0x18,
    0x16, 0x0d, 0xdd, 0x14, 0x61, 0x00, 0xe6, 0x57, 0x80, 0x63, 0x23, 0xb8, 0x72, 0xdd, 0x14, 0x61,
    0x01, 0x04, 0x57, 0x5b, 0x60, 0x00, 0x80, 0xfd, 0x5b, 0x61, 0x00, 0xa0, 0x61, 0x02, 0x00, 0x56,
    0x5b, 0x60, 0x40, 0x51, 0x61, 0x00, 0xad, 0x91, 0x90, 0x61, 0x04, 0x9b, 0x56, 0x5b, 0x60, 0x40,
    0x51, 0x80, 0x91, 0x03, 0x90, 0xf3, 0x5b, 0x61, 0x00, 0xd0, 0x60, 0x04, 0x80, 0x36, 0x03, 0x81,
    0x01, 0x90, 0x61, 0x00, 0xcb, 0x91, 0x90, 0x61, 0x05, 0x56, 0x56, 0x5b, 0x61, 0x02, 0x9a, 0x56,
    0x5b, 0x60, 0x40, 0x51, 0x61, 0x00, 0xdd, 0x91, 0x90, 0x61, 0x05, 0xb1, 0x56, 0x5b, 0x60, 0x40,
    0x51, 0x80, 0x91, 0x03, 0x90, 0xf3, 0x5b, 0x61, 0x00, 0xee, 0x61, 0x02, 0xae, 0x56, 0x5b, 0x60,
    0x40, 0x51, 0x61, 0x00, 0xfb, 0x91, 0x90, 0x61, 0x05, 0xdb, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80,
    0x91, 0x03, 0x90, 0xf3, 0x5b, 0x61, 0x01, 0x1e, 0x60, 0x04, 0x80, 0x36, 0x03, 0x81, 0x01, 0x90,
    0x61, 0x01, 0x19, 0x91, 0x90, 0x61, 0x05, 0xf6, 0x56, 0x5b, 0x61, 0x02, 0xbf, 0x56, 0x5b, 0x60,
    0x40, 0x51, 0x61, 0x01, 0x2b, 0x91, 0x90, 0x61, 0x05, 0xb1, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80,
    0x91, 0x03, 0x90, 0xf3, 0x5b, 0x61, 0x01, 0x3c, 0x61, 0x02, 0xd4, 0x56, 0x5b, 0x60, 0x40, 0x51,
    0x61, 0x01, 0x49, 0x91, 0x90, 0x61, 0x06, 0x65, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03,
    0x90, 0xf3, 0x5b, 0x61, 0x01, 0x6c, 0x60, 0x04, 0x80, 0x36, 0x03, 0x81, 0x01, 0x90, 0x61, 0x01,
    0x67, 0x91, 0x90, 0x61, 0x06, 0x80, 0x56, 0x5b, 0x61, 0x02, 0xf3, 0x56, 0x5b, 0x60, 0x40, 0x51,
    0x61, 0x01, 0x79, 0x91, 0x90, 0x61, 0x05, 0xdb, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03,
    0x90, 0xf3, 0x5b, 0x61, 0x01, 0x8a, 0x61, 0x03, 0x06, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x61, 0x01,
    0x97, 0x91, 0x90, 0x61, 0x04, 0x9b, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03, 0x90, 0xf3,
    0x5b, 0x61, 0x01, 0xba, 0x60, 0x04, 0x80, 0x36, 0x03, 0x81, 0x01, 0x90, 0x61, 0x01, 0xb5, 0x91,
    0x90, 0x61, 0x05, 0x56, 0x56, 0x5b, 0x61, 0x03, 0xa0, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x61, 0x01,
    0xc7, 0x91, 0x90, 0x61, 0x05, 0xb1, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03, 0x90, 0xf3,
    0x5b, 0x61, 0x01, 0xea, 0x60, 0x04, 0x80, 0x36, 0x03, 0x81, 0x01, 0x90, 0x61, 0x01, 0xe5, 0x91,
    0x90, 0x61, 0x06, 0xad, 0x56, 0x5b, 0x61, 0x03, 0xb4, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x61, 0x01,
    0xf7, 0x91, 0x90, 0x61, 0x05, 0xdb, 0x56, 0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03, 0x90, 0xf3,
    0x5b, 0x60, 0x60, 0x61, 0x02, 0x0a, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00, 0x80, 0x54, 0x61,
    0x02, 0x17, 0x90, 0x61, 0x07, 0x1c, 0x56, 0x5b, 0x80, 0x60, 0x1f, 0x01, 0x60, 0x20, 0x80, 0x91,
    0x04, 0x02, 0x60, 0x20, 0x01, 0x60, 0x40, 0x51, 0x90, 0x81, 0x01, 0x60, 0x40, 0x52, 0x80, 0x92,
    0x91, 0x90, 0x81, 0x81, 0x52, 0x60, 0x20, 0x01, 0x82, 0x80, 0x54, 0x61, 0x02, 0x43, 0x90, 0x61,
    0x07, 0x1c, 0x56, 0x5b, 0x80, 0x15, 0x61, 0x02, 0x90, 0x57, 0x80, 0x60, 0x1f, 0x10, 0x61, 0x02,
    0x65, 0x57, 0x61, 0x01, 0x00, 0x80, 0x83, 0x54, 0x04, 0x02, 0x83, 0x52, 0x91, 0x60, 0x20, 0x01,
    0x91, 0x61, 0x02, 0x90, 0x56, 0x5b, 0x82, 0x01, 0x91, 0x90, 0x60, 0x00, 0x52, 0x60, 0x20, 0x60,
    0x00, 0x20, 0x90, 0x5b, 0x81, 0x54, 0x81, 0x52, 0x90, 0x60, 0x01, 0x01, 0x90, 0x60, 0x20, 0x01,
    0x80, 0x83, 0x11, 0x61, 0x02, 0x73, 0x57, 0x82, 0x90, 0x03, 0x60, 0x1f, 0x16, 0x82, 0x01, 0x91,
    0x5b, 0x50, 0x50, 0x50, 0x50, 0x50, 0x90, 0x50, 0x90, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x02, 0xa4,
    0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00, 0x90, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60,
    0x00, 0x61, 0x02, 0xb8, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00, 0x90, 0x50, 0x90, 0x56, 0x5b,
    0x60, 0x00, 0x61, 0x02, 0xc9, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00, 0x90, 0x50, 0x93, 0x92,
    0x50, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x02, 0xde, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60,
    0x02, 0x60, 0x00, 0x90, 0x54, 0x90, 0x61, 0x01, 0x00, 0x0a, 0x90, 0x04, 0x60, 0xff, 0x16, 0x90,
    0x50, 0x90, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x02, 0xfd, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00,
    0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x60, 0x60, 0x61, 0x03, 0x10, 0x61, 0x03, 0xc8, 0x56,
    0x5b, 0x60, 0x01, 0x80, 0x54, 0x61, 0x03, 0x1d, 0x90, 0x61, 0x07, 0x1c, 0x56, 0x5b, 0x80, 0x60,
    0x1f, 0x01, 0x60, 0x20, 0x80, 0x91, 0x04, 0x02, 0x60, 0x20, 0x01, 0x60, 0x40, 0x51, 0x90, 0x81,
    0x01, 0x60, 0x40, 0x52, 0x80, 0x92, 0x91, 0x90, 0x81, 0x81, 0x52, 0x60, 0x20, 0x01, 0x82, 0x80,
    0x54, 0x61, 0x03, 0x49, 0x90, 0x61, 0x07, 0x1c, 0x56, 0x5b, 0x80, 0x15, 0x61, 0x03, 0x96, 0x57,
    0x80, 0x60, 0x1f, 0x10, 0x61, 0x03, 0x6b, 0x57, 0x61, 0x01, 0x00, 0x80, 0x83, 0x54, 0x04, 0x02,
    0x83, 0x52, 0x91, 0x60, 0x20, 0x01, 0x91, 0x61, 0x03, 0x96, 0x56, 0x5b, 0x82, 0x01, 0x91, 0x90,
    0x60, 0x00, 0x52, 0x60, 0x20, 0x60, 0x00, 0x20, 0x90, 0x5b, 0x81, 0x54, 0x81, 0x52, 0x90, 0x60,
    0x01, 0x01, 0x90, 0x60, 0x20, 0x01, 0x80, 0x83, 0x11, 0x61, 0x03, 0x79, 0x57, 0x82, 0x90, 0x03,
    0x60, 0x1f, 0x16, 0x82, 0x01, 0x91, 0x5b, 0x50, 0x50, 0x50, 0x50, 0x50, 0x90, 0x50, 0x90, 0x56,
    0x5b, 0x60, 0x00, 0x61, 0x03, 0xaa, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60, 0x00, 0x90, 0x50, 0x92,
    0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x03, 0xbe, 0x61, 0x03, 0xc8, 0x56, 0x5b, 0x60,
    0x00, 0x90, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x04, 0x09, 0x57, 0x60,
    0x40, 0x51, 0x7f, 0x08, 0xc3, 0x79, 0xa0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x81, 0x52, 0x60, 0x04, 0x01, 0x61, 0x04, 0x00, 0x90, 0x61, 0x07, 0x99, 0x56,
    0x5b, 0x60, 0x40, 0x51, 0x80, 0x91, 0x03, 0x90, 0xfd, 0x5b, 0x56, 0x5b, 0x60, 0x00, 0x81, 0x51,
    0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x82, 0x82, 0x52, 0x60, 0x20, 0x82, 0x01,
    0x90, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x5b, 0x83, 0x81, 0x10, 0x15, 0x61,
    0x04, 0x45, 0x57, 0x80, 0x82, 0x01, 0x51, 0x81, 0x84, 0x01, 0x52, 0x60, 0x20, 0x81, 0x01, 0x90,
    0x50, 0x61, 0x04, 0x2a, 0x56, 0x5b, 0x60, 0x00, 0x84, 0x84, 0x01, 0x52, 0x50, 0x50, 0x50, 0x50,
    0x56, 0x5b, 0x60, 0x00, 0x60, 0x1f, 0x19, 0x60, 0x1f, 0x83, 0x01, 0x16, 0x90, 0x50, 0x91, 0x90,
    0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x04, 0x6d, 0x82, 0x61, 0x04, 0x0b, 0x56, 0x5b, 0x61, 0x04,
    0x77, 0x81, 0x85, 0x61, 0x04, 0x16, 0x56, 0x5b, 0x93, 0x50, 0x61, 0x04, 0x87, 0x81, 0x85, 0x60,
    0x20, 0x86, 0x01, 0x61, 0x04, 0x27, 0x56, 0x5b, 0x61, 0x04, 0x90, 0x81, 0x61, 0x04, 0x51, 0x56,
    0x5b, 0x84, 0x01, 0x91, 0x50, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x60, 0x20,
    0x82, 0x01, 0x90, 0x50, 0x81, 0x81, 0x03, 0x60, 0x00, 0x83, 0x01, 0x52, 0x61, 0x04, 0xb5, 0x81,
    0x84, 0x61, 0x04, 0x62, 0x56, 0x5b, 0x90, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00,
    0x80, 0xfd, 0x5b, 0x60, 0x00, 0x73, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x82, 0x16, 0x90, 0x50, 0x91, 0x90,
    0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x04, 0xed, 0x82, 0x61, 0x04, 0xc2, 0x56, 0x5b, 0x90, 0x50,
    0x91, 0x90, 0x50, 0x56, 0x5b, 0x61, 0x04, 0xfd, 0x81, 0x61, 0x04, 0xe2, 0x56, 0x5b, 0x81, 0x14,
    0x61, 0x05, 0x08, 0x57, 0x60, 0x00, 0x80, 0xfd, 0x5b, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x81, 0x35,
    0x90, 0x50, 0x61, 0x05, 0x1a, 0x81, 0x61, 0x04, 0xf4, 0x56, 0x5b, 0x92, 0x91, 0x50, 0x50, 0x56,
    0x5b, 0x60, 0x00, 0x81, 0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x61, 0x05, 0x33, 0x81, 0x61,
    0x05, 0x20, 0x56, 0x5b, 0x81, 0x14, 0x61, 0x05, 0x3e, 0x57, 0x60, 0x00, 0x80, 0xfd, 0x5b, 0x50,
    0x56, 0x5b, 0x60, 0x00, 0x81, 0x35, 0x90, 0x50, 0x61, 0x05, 0x50, 0x81, 0x61, 0x05, 0x2a, 0x56,
    0x5b, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x80, 0x60, 0x40, 0x83, 0x85, 0x03, 0x12,
    0x15, 0x61, 0x05, 0x6d, 0x57, 0x61, 0x05, 0x6c, 0x61, 0x04, 0xbd, 0x56, 0x5b, 0x5b, 0x60, 0x00,
    0x61, 0x05, 0x7b, 0x85, 0x82, 0x86, 0x01, 0x61, 0x05, 0x0b, 0x56, 0x5b, 0x92, 0x50, 0x50, 0x60,
    0x20, 0x61, 0x05, 0x8c, 0x85, 0x82, 0x86, 0x01, 0x61, 0x05, 0x41, 0x56, 0x5b, 0x91, 0x50, 0x50,
    0x92, 0x50, 0x92, 0x90, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x81, 0x15, 0x15, 0x90, 0x50, 0x91, 0x90,
    0x50, 0x56, 0x5b, 0x61, 0x05, 0xab, 0x81, 0x61, 0x05, 0x96, 0x56, 0x5b, 0x82, 0x52, 0x50, 0x50,
    0x56, 0x5b, 0x60, 0x00, 0x60, 0x20, 0x82, 0x01, 0x90, 0x50, 0x61, 0x05, 0xc6, 0x60, 0x00, 0x83,
    0x01, 0x84, 0x61, 0x05, 0xa2, 0x56, 0x5b, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x61, 0x05, 0xd5,
    0x81, 0x61, 0x05, 0x20, 0x56, 0x5b, 0x82, 0x52, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x60, 0x20,
    0x82, 0x01, 0x90, 0x50, 0x61, 0x05, 0xf0, 0x60, 0x00, 0x83, 0x01, 0x84, 0x61, 0x05, 0xcc, 0x56,
    0x5b, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x80, 0x60, 0x00, 0x60, 0x60, 0x84, 0x86,
    0x03, 0x12, 0x15, 0x61, 0x06, 0x0f, 0x57, 0x61, 0x06, 0x0e, 0x61, 0x04, 0xbd, 0x56, 0x5b, 0x5b,
    0x60, 0x00, 0x61, 0x06, 0x1d, 0x86, 0x82, 0x87, 0x01, 0x61, 0x05, 0x0b, 0x56, 0x5b, 0x93, 0x50,
    0x50, 0x60, 0x20, 0x61, 0x06, 0x2e, 0x86, 0x82, 0x87, 0x01, 0x61, 0x05, 0x0b, 0x56, 0x5b, 0x92,
    0x50, 0x50, 0x60, 0x40, 0x61, 0x06, 0x3f, 0x86, 0x82, 0x87, 0x01, 0x61, 0x05, 0x41, 0x56, 0x5b,
    0x91, 0x50, 0x50, 0x92, 0x50, 0x92, 0x50, 0x92, 0x56, 0x5b, 0x60, 0x00, 0x60, 0xff, 0x82, 0x16,
    0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x61, 0x06, 0x5f, 0x81, 0x61, 0x06, 0x49, 0x56, 0x5b,
    0x82, 0x52, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x60, 0x20, 0x82, 0x01, 0x90, 0x50, 0x61, 0x06,
    0x7a, 0x60, 0x00, 0x83, 0x01, 0x84, 0x61, 0x06, 0x56, 0x56, 0x5b, 0x92, 0x91, 0x50, 0x50, 0x56,
    0x5b, 0x60, 0x00, 0x60, 0x20, 0x82, 0x84, 0x03, 0x12, 0x15, 0x61, 0x06, 0x96, 0x57, 0x61, 0x06,
    0x95, 0x61, 0x04, 0xbd, 0x56, 0x5b, 0x5b, 0x60, 0x00, 0x61, 0x06, 0xa4, 0x84, 0x82, 0x85, 0x01,
    0x61, 0x05, 0x0b, 0x56, 0x5b, 0x91, 0x50, 0x50, 0x92, 0x91, 0x50, 0x50, 0x56, 0x5b, 0x60, 0x00,
    0x80, 0x60, 0x40, 0x83, 0x85, 0x03, 0x12, 0x15, 0x61, 0x06, 0xc4, 0x57, 0x61, 0x06, 0xc3, 0x61,
    0x04, 0xbd, 0x56, 0x5b, 0x5b, 0x60, 0x00, 0x61, 0x06, 0xd2, 0x85, 0x82, 0x86, 0x01, 0x61, 0x05,
    0x0b, 0x56, 0x5b, 0x92, 0x50, 0x50, 0x60, 0x20, 0x61, 0x06, 0xe3, 0x85, 0x82, 0x86, 0x01, 0x61,
    0x05, 0x0b, 0x56, 0x5b, 0x91, 0x50, 0x50, 0x92, 0x50, 0x92, 0x90, 0x50, 0x56, 0x5b, 0x7f, 0x4e,
    0x48, 0x7b, 0x71, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60,
    0x00, 0x52, 0x60, 0x22, 0x60, 0x04, 0x52, 0x60, 0x24, 0x60, 0x00, 0xfd, 0x5b, 0x60, 0x00, 0x60,
    0x02, 0x82, 0x04, 0x90, 0x50, 0x60, 0x01, 0x82, 0x16, 0x80, 0x61, 0x07, 0x34, 0x57, 0x60, 0x7f,
    0x82, 0x16, 0x91, 0x50, 0x5b, 0x60, 0x20, 0x82, 0x10, 0x81, 0x03, 0x61, 0x07, 0x47, 0x57, 0x61,
    0x07, 0x46, 0x61, 0x06, 0xed, 0x56, 0x5b, 0x5b, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x7f, 0x49,
    0x20, 0x61, 0x6d, 0x20, 0x61, 0x20, 0x72, 0x6f, 0x63, 0x6b, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60,
    0x00, 0x82, 0x01, 0x52, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x61, 0x07, 0x83, 0x60, 0x0b, 0x83, 0x61,
    0x04, 0x16, 0x56, 0x5b, 0x91, 0x50, 0x61, 0x07, 0x8e, 0x82, 0x61, 0x07, 0x4d, 0x56, 0x5b, 0x60,
    0x20, 0x82, 0x01, 0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0x5b, 0x60, 0x00, 0x60, 0x20, 0x82, 0x01,
    0x90, 0x50, 0x81, 0x81, 0x03, 0x60, 0x00, 0x83, 0x01, 0x52, 0x61, 0x07, 0xb2, 0x81, 0x61, 0x07,
    0x76, 0x56, 0x5b, 0x90, 0x50, 0x91, 0x90, 0x50, 0x56, 0xfe, 0xa2, 0x64, 0x69, 0x70, 0x66, 0x73,
    0x58, 0x22, 0x12, 0x20, 0xfa, 0x2f, 0x51, 0x76, 0x77, 0x83, 0xd6, 0x1b, 0x00, 0x8f, 0xdb, 0x07,
    0x03, 0xfb, 0xf3, 0xae, 0x07, 0x5d, 0xc1, 0xdb, 0x04, 0xc7, 0xab, 0x17, 0x32, 0x33, 0xe1, 0x2e,
    0x75, 0xaa, 0x16, 0x99, 0x64, 0x73, 0x6f, 0x6c, 0x63, 0x43, 0x00, 0x08, 0x11, 0x00, 0x33,];

/// Code hash shared by every bank contract account
pub fn vfbc_code_hash() -> [u8; 32] {
    keccak256(VFBC_RUNTIME_CODE)
}

/// Init code that copies and returns the runtime code, followed by the
/// ABI-encoded constructor arguments `(name, symbol, decimals)`. The
/// display name is used for both name and symbol.
pub fn creation_bytecode(name: &str, decimals: u8) -> Vec<u8> {
    let len = (VFBC_RUNTIME_CODE.len() as u16).to_be_bytes();
    let offset = (INIT_PRELUDE.len() as u16).to_be_bytes();

    let mut code = INIT_PRELUDE.to_vec();
    code[1..3].copy_from_slice(&len);
    code[5..7].copy_from_slice(&offset);
    code.extend_from_slice(VFBC_RUNTIME_CODE);
    code.extend(abi::encode_constructor_args(name, name, decimals));
    code
}

/// `PUSH2 len DUP1 PUSH2 offset PUSH1 0 CODECOPY PUSH1 0 RETURN INVALID`
const INIT_PRELUDE: [u8; 14] = [
    0x61, 0x00, 0x00, 0x80, 0x61, 0x00, 0x00, 0x60, 0x00, 0x39, 0x60, 0x00, 0xf3, 0xfe,
];

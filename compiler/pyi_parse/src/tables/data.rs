//! Dense LALR(1) tables for the stub grammar.
//!
//! Row/column compressed in the usual way: `PACT[state] + terminal` indexes
//! `TABLE`/`CHECK` for the action, and `PGOTO[lhs] + state` indexes them for
//! the goto. A `CHECK` mismatch falls back to `DEFACT`/`DEFGOTO`.

/// Number of terminal symbols; nonterminal numbers start here.
pub(crate) const NTOKENS: usize = 51;

/// Highest valid index into `TABLE` and `CHECK`.
pub(crate) const LAST: usize = 567;

/// `PACT` marker for states that only have a default action.
pub(crate) const PACT_NINF: i16 = -347;

/// `TABLE` marker for an explicit syntax error.
pub(crate) const TABLE_NINF: i16 = -210;

/// Reaching this state accepts the input.
pub(crate) const FINAL_STATE: u16 = 6;

const STATE_COUNT: usize = 418;
const RULE_COUNT: usize = 213;
const NONTERMINAL_COUNT: usize = 77;
const TABLE_LEN: usize = LAST + 1;

pub(crate) static PACT: [i16; STATE_COUNT] = [
    -17, -347, 73, 87, 422, 117, -347, -347, 214, 37, 128, 10, 84, -347, -347, 187,
    121, -347, -347, -347, -347, -347, 36, -347, 43, 169, -347, 37, 256, 428, 90, -347,
    88, 17, 148, 160, 43, -347, 37, 126, 171, 180, -347, 226, 128, -347, 234, -347,
    223, 239, 246, 248, 43, -347, 338, 212, -347, -347, 303, 216, 43, 348, 146, -347,
    274, 37, 37, -347, -347, -347, -347, 359, -347, -347, 363, 77, 371, 128, -347, -347,
    372, 362, 26, -347, 362, 388, 256, 345, 349, -347, -347, 352, -11, 409, 391, 392,
    398, 399, 293, 43, 43, 378, -347, 199, 401, 43, 242, 387, -347, 368, 390, -347,
    -347, -347, 413, -347, 375, 400, 407, -347, -347, 433, -347, 403, -347, -347, 427, -347,
    -347, 432, -347, -347, 395, -347, 416, 414, -347, 362, 27, 416, 435, -347, -347, -347,
    151, 271, 418, -347, -347, -347, -347, -347, 423, 424, 425, 426, 429, -347, 453, -347,
    416, -347, -347, -347, 276, 43, 431, -347, 307, 439, 18, 312, 43, 441, 416, 475,
    -347, 446, 477, 443, 43, 480, 461, 309, -347, 395, 416, -347, 416, 225, 397, -347,
    445, 223, 248, -347, 323, -347, 307, 416, 416, 447, 450, 43, 437, -347, 451, 452,
    448, 307, 211, 454, 281, 457, -347, -347, 307, 307, -347, -347, -347, 33, -347, 456,
    48, 455, -347, -347, -347, 369, -347, -347, -347, -347, -347, 43, -347, 322, 296, 22,
    82, 459, 9, 459, 156, 4, 460, -347, -347, 43, -347, -347, -347, 462, 464, -347,
    465, -347, -347, -347, 477, 330, -347, -347, -347, 307, -347, -347, -347, 100, -347, 416,
    469, -347, 23, 463, 467, -347, 469, 495, -347, 468, -347, -347, 470, -347, -347, 471,
    -347, 473, 474, 478, -347, 476, -347, 506, -347, 479, 307, 334, 510, 281, -347, -347,
    512, 20, 485, 99, -347, -347, 43, 481, -347, 516, 494, 145, -347, -347, 483, 486,
    482, -347, 520, 484, -347, -347, 524, 523, 487, 489, -347, -347, 307, 462, -347, 464,
    492, 498, -347, 286, -347, -347, 187, 496, -347, -347, -347, 307, 197, -347, -347, 43,
    497, 22, 43, -347, -347, -347, -347, -347, -347, -347, 43, -347, -347, 241, 499, 500,
    502, -347, -347, -347, 307, 420, -347, -347, -347, 156, 156, 507, 508, -347, 361, 434,
    416, 503, -347, -347, -347, 125, 504, 43, 505, 89, -347, 509, 421, -347, -347, -347,
    175, 206, -347, 43, 253, -347, -347, -347, -347, 132, 513, -347, -347, 307, 511, -347,
    -347, -347,
];

/// Default reduction per state; 0 means error.
pub(crate) static DEFACT: [u8; STATE_COUNT] = [
    12, 12, 0, 0, 118, 0, 1, 2, 0, 0, 0, 0, 0, 9, 11, 38,
    0, 5, 7, 8, 10, 6, 121, 3, 0, 0, 204, 0, 45, 0, 14, 78,
    79, 0, 0, 81, 0, 47, 0, 0, 0, 0, 120, 0, 0, 117, 0, 179,
    0, 0, 0, 0, 0, 178, 14, 168, 64, 65, 0, 67, 0, 100, 14, 66,
    0, 0, 0, 62, 63, 60, 61, 210, 58, 59, 0, 0, 0, 0, 73, 13,
    0, 0, 0, 82, 0, 14, 46, 0, 0, 12, 16, 19, 14, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 69, 0, 0, 0, 0, 186, 102, 0, 186, 203,
    97, 54, 53, 52, 206, 0, 0, 205, 48, 0, 49, 140, 77, 80, 88, 89,
    90, 91, 92, 93, 0, 94, 14, 83, 87, 0, 0, 14, 0, 71, 12, 12,
    118, 0, 0, 119, 113, 114, 115, 116, 0, 0, 0, 0, 0, 175, 177, 176,
    14, 161, 162, 160, 0, 165, 186, 158, 159, 104, 14, 0, 185, 0, 14, 185,
    99, 0, 210, 0, 165, 0, 0, 0, 75, 0, 14, 74, 14, 118, 118, 39,
    204, 24, 25, 18, 0, 21, 22, 14, 14, 0, 0, 0, 0, 70, 0, 0,
    186, 167, 185, 0, 0, 0, 68, 202, 200, 199, 201, 98, 101, 0, 209, 207,
    0, 0, 95, 96, 84, 0, 86, 76, 72, 40, 37, 0, 17, 0, 0, 123,
    0, 186, 0, 186, 186, 0, 186, 169, 163, 185, 164, 157, 170, 204, 106, 109,
    105, 103, 50, 51, 210, 0, 55, 141, 85, 23, 20, 211, 212, 36, 15, 14,
    131, 129, 127, 0, 186, 125, 131, 0, 181, 186, 183, 185, 0, 191, 188, 186,
    190, 0, 0, 0, 193, 186, 195, 185, 198, 0, 166, 0, 0, 0, 208, 56,
    0, 36, 0, 118, 29, 26, 0, 135, 136, 0, 139, 14, 122, 128, 0, 185,
    0, 171, 185, 0, 172, 173, 0, 185, 0, 0, 174, 111, 110, 0, 108, 107,
    0, 0, 27, 0, 35, 34, 42, 0, 31, 32, 33, 130, 0, 126, 137, 0,
    151, 0, 0, 182, 180, 189, 187, 196, 194, 192, 0, 57, 28, 0, 0, 0,
    0, 132, 133, 134, 138, 0, 112, 144, 124, 186, 186, 0, 0, 36, 0, 0,
    145, 0, 197, 36, 36, 118, 0, 0, 0, 0, 153, 0, 0, 147, 146, 184,
    118, 118, 43, 0, 155, 150, 143, 152, 149, 0, 0, 44, 41, 154, 0, 142,
    148, 156,
];

pub(crate) static PGOTO: [i16; NONTERMINAL_COUNT] = [
    -347, -347, 542, -85, -44, -304, -347, -347, -347, 308, -347, 243, -71, -347, -347, -347,
    -347, -301, 205, 208, 80, 331, 374, -296, -347, -347, 488, 543, -77, 430, -170, -291,
    -347, -347, -347, -347, 252, 255, -288, -347, -347, -347, -347, -347, -347, 203, 279, -347,
    -347, -347, -346, -347, -347, 162, -232, -347, 350, 379, 351, -24, -347, -347, 245, -105,
    -347, -347, 244, -347, -347, 240, -347, -347, -347, 12, -347, -176, -230,
];

pub(crate) static DEFGOTO: [i16; NONTERMINAL_COUNT] = [
    -1, 2, 3, 4, 78, 13, 91, 146, 196, 197, 270, 306, 307, 14, 15, 341,
    342, 16, 39, 40, 28, 122, 75, 17, 18, 30, 31, 83, 134, 135, 136, 19,
    109, 110, 20, 213, 254, 255, 21, 152, 22, 45, 46, 275, 276, 277, 311, 349,
    278, 352, 79, 374, 375, 393, 394, 166, 167, 207, 208, 209, 241, 281, 282, 173,
    243, 287, 288, 246, 293, 294, 297, 107, 63, 55, 117, 118, 308,
];

pub(crate) static TABLE: [i16; TABLE_LEN] = [
    54, 62, 223, 340, 144, 176, 343, 139, 271, 291, 102, 344, 85, 26, 285, 230,
    345, 1, 112, 346, 26, 29, 32, 35, 76, 272, 312, 383, 98, 26, 26, 99,
    100, 81, 74, 267, 106, 258, 398, 29, 26, 141, 137, 42, 43, 35, 26, 268,
    147, 273, 29, 286, 261, 76, 292, 33, 92, 189, 190, 230, 186, 211, 82, 47,
    48, 49, 50, 51, 274, 313, 121, 138, 138, 6, 27, 158, 159, 29, 29, 168,
    52, 170, 120, 44, 302, 340, 262, 7, 343, 32, 184, 53, 390, 344, 35, 187,
    340, 340, 345, 343, 343, 346, 339, 250, 344, 344, 80, 64, 391, 345, 345, 9,
    346, 346, 121, 267, 205, 23, 86, 279, 36, 198, 406, 12, 280, 76, 214, 268,
    339, 77, 219, 26, -30, 74, 305, 390, 284, 9, 289, 290, 98, 296, 231, 384,
    232, 114, 115, 216, 217, 12, 35, 391, 395, 397, 8, 238, 239, 41, 402, 99,
    100, 407, 87, 9, 84, 415, 410, 10, 11, 99, 100, 316, 26, 56, 57, 12,
    320, 407, 339, 244, 76, 76, 323, -185, 191, 111, 168, 9, 328, 47, 48, 49,
    50, 51, 58, 283, 59, 37, 38, 12, 369, 370, 26, 161, 162, 74, 60, 88,
    411, 339, 61, 265, 89, 198, 26, 161, 162, 53, 9, 47, 48, 49, 50, 51,
    371, 298, 163, 309, 8, 90, 12, 47, 48, 49, 50, 51, 164, 9, 163, 412,
    165, 10, 11, 93, 26, 56, 57, 53, 52, 12, 24, 105, 165, 103, 25, 99,
    100, 74, 233, 53, 94, 47, 48, 49, 50, 51, 99, 100, 59, 65, 66, 353,
    385, 386, 192, 332, 95, 298, 60, 26, 157, 171, 61, 96, 253, 97, 347, 65,
    66, 53, 414, 47, 193, 49, 50, 194, 47, 48, 49, 50, 51, 47, 48, 49,
    50, 51, 99, 100, 52, 195, 389, 267, 113, 52, 206, 26, 400, 401, 52, 53,
    99, 100, 24, 268, 53, 192, 365, 372, 269, 53, 377, 157, 47, 48, 49, 50,
    51, 26, 378, 331, 104, 62, 47, 193, 49, 50, 194, 228, 229, 52, 215, 99,
    100, 108, 47, 48, 49, 50, 51, 52, 53, 236, 237, 116, 390, 126, 119, 404,
    303, 304, 53, 52, 126, 76, 123, 125, 267, 142, 101, 413, 391, 143, 53, 127,
    128, 129, 130, 131, 268, 145, 127, 128, 129, 130, 131, 392, 153, 154, 126, 132,
    8, 99, 100, 155, 156, 160, 169, 264, 133, 9, 174, -209, 148, 10, 11, 133,
    127, 128, 129, 130, 131, 12, -4, 76, 390, 8, 172, 66, 140, 175, 234, 149,
    150, 151, 9, 267, 267, 179, 10, 11, 391, 133, 177, 178, 180, 181, 12, 268,
    268, 267, 182, 76, 382, 185, 199, 76, 67, 68, 69, 70, 200, 268, 188, 201,
    202, 203, 396, 100, 204, 71, 210, 72, 73, 74, 67, 68, 69, 70, 212, 218,
    220, 222, 224, 226, 227, 235, 245, 249, 240, 72, 73, 242, 260, 247, 248, 257,
    252, 263, 283, 295, 318, 314, 299, 300, 301, 310, 315, 319, 321, 329, 322, 324,
    325, 333, 326, 327, 336, 330, 338, 350, 351, 348, 354, 279, 356, 285, 358, 359,
    291, 362, 363, 364, 368, 373, 381, 379, 380, 361, 405, 387, 388, 399, 408, 5,
    403, 266, 416, 366, 337, 417, 367, 221, 259, 335, 34, 334, 376, 317, 409, 225,
    251, 0, 183, 256, 355, 124, 357, 360,
];

pub(crate) static CHECK: [i16; TABLE_LEN] = [
    24, 25, 178, 307, 89, 110, 307, 84, 238, 5, 54, 307, 36, 3, 5, 185,
    307, 34, 62, 307, 3, 9, 10, 11, 35, 3, 3, 373, 52, 3, 3, 13,
    14, 16, 45, 15, 60, 4, 384, 27, 3, 85, 16, 7, 8, 33, 3, 27,
    92, 27, 38, 42, 4, 35, 50, 45, 44, 142, 143, 229, 137, 166, 45, 20,
    21, 22, 23, 24, 46, 46, 37, 45, 45, 0, 37, 99, 100, 65, 66, 103,
    37, 105, 5, 47, 260, 389, 38, 0, 389, 77, 134, 48, 3, 389, 82, 139,
    400, 401, 389, 400, 401, 389, 3, 208, 400, 401, 18, 27, 19, 400, 401, 12,
    400, 401, 37, 15, 160, 0, 38, 37, 36, 145, 33, 24, 42, 35, 170, 27,
    3, 39, 174, 3, 33, 45, 34, 3, 241, 12, 243, 244, 164, 246, 186, 373,
    188, 65, 66, 171, 172, 24, 138, 19, 382, 383, 3, 199, 200, 36, 33, 13,
    14, 393, 36, 12, 16, 33, 396, 16, 17, 13, 14, 276, 3, 4, 5, 24,
    281, 409, 3, 203, 35, 35, 287, 38, 33, 39, 210, 12, 293, 20, 21, 22,
    23, 24, 25, 39, 27, 10, 11, 24, 3, 4, 3, 4, 5, 45, 37, 36,
    33, 3, 41, 235, 32, 237, 3, 4, 5, 48, 12, 20, 21, 22, 23, 24,
    27, 249, 27, 271, 3, 3, 24, 20, 21, 22, 23, 24, 37, 12, 27, 33,
    41, 16, 17, 9, 3, 4, 5, 48, 37, 24, 36, 35, 41, 41, 40, 13,
    14, 45, 33, 48, 37, 20, 21, 22, 23, 24, 13, 14, 27, 13, 14, 315,
    377, 378, 3, 299, 37, 301, 37, 3, 38, 39, 41, 37, 3, 37, 310, 13,
    14, 48, 37, 20, 21, 22, 23, 24, 20, 21, 22, 23, 24, 20, 21, 22,
    23, 24, 13, 14, 37, 38, 381, 15, 38, 37, 38, 3, 387, 388, 37, 48,
    13, 14, 36, 27, 48, 3, 40, 351, 32, 48, 354, 38, 20, 21, 22, 23,
    24, 3, 362, 5, 37, 365, 20, 21, 22, 23, 24, 38, 39, 37, 38, 13,
    14, 5, 20, 21, 22, 23, 24, 37, 48, 38, 39, 4, 3, 3, 3, 391,
    38, 39, 48, 37, 3, 35, 3, 3, 15, 32, 40, 403, 19, 32, 48, 21,
    22, 23, 24, 25, 27, 37, 21, 22, 23, 24, 25, 34, 5, 5, 3, 37,
    3, 13, 14, 5, 5, 27, 5, 38, 46, 12, 42, 36, 3, 16, 17, 46,
    21, 22, 23, 24, 25, 24, 0, 35, 3, 3, 39, 14, 40, 39, 33, 22,
    23, 24, 12, 15, 15, 4, 16, 17, 19, 46, 42, 36, 41, 18, 24, 27,
    27, 15, 18, 35, 32, 39, 36, 35, 28, 29, 30, 31, 37, 27, 27, 39,
    39, 39, 32, 14, 39, 41, 39, 43, 44, 45, 28, 29, 30, 31, 39, 38,
    5, 4, 39, 3, 23, 40, 49, 39, 41, 43, 44, 41, 36, 42, 42, 38,
    42, 42, 39, 39, 5, 38, 40, 39, 39, 36, 39, 39, 38, 3, 39, 38,
    38, 3, 36, 39, 4, 38, 33, 3, 26, 40, 39, 37, 42, 5, 42, 3,
    5, 40, 38, 33, 36, 36, 32, 36, 36, 50, 33, 32, 32, 38, 33, 1,
    40, 237, 33, 342, 305, 38, 342, 177, 221, 301, 11, 300, 353, 278, 396, 180,
    210, -1, 132, 212, 319, 77, 322, 327,
];

/// Accessing symbol of each state.
pub(crate) static STOS: [u8; STATE_COUNT] = [
    0, 34, 52, 53, 54, 53, 0, 0, 3, 12, 16, 17, 24, 56, 64, 65,
    68, 74, 75, 82, 85, 89, 91, 0, 36, 40, 3, 37, 71, 124, 76, 77,
    124, 45, 78, 124, 36, 10, 11, 69, 70, 36, 7, 8, 47, 92, 93, 20,
    21, 22, 23, 24, 37, 48, 110, 124, 4, 5, 25, 27, 37, 41, 110, 123,
    71, 13, 14, 28, 29, 30, 31, 41, 43, 44, 45, 73, 35, 39, 55, 101,
    18, 16, 45, 78, 16, 110, 71, 36, 36, 32, 3, 57, 124, 9, 37, 37,
    37, 37, 110, 13, 14, 40, 55, 41, 37, 35, 110, 122, 5, 83, 84, 39,
    55, 38, 71, 71, 4, 125, 126, 3, 5, 37, 72, 3, 77, 3, 3, 21,
    22, 23, 24, 25, 37, 46, 79, 80, 81, 16, 45, 79, 40, 55, 32, 32,
    54, 37, 58, 55, 3, 22, 23, 24, 90, 5, 5, 5, 5, 38, 110, 110,
    27, 4, 5, 27, 37, 41, 106, 107, 110, 5, 110, 39, 39, 114, 42, 39,
    114, 42, 36, 4, 41, 18, 18, 80, 55, 39, 79, 55, 27, 54, 54, 33,
    3, 21, 24, 38, 59, 60, 110, 36, 37, 39, 39, 39, 39, 55, 38, 108,
    109, 110, 39, 114, 39, 86, 55, 38, 110, 110, 38, 55, 5, 73, 4, 126,
    39, 108, 3, 23, 38, 39, 81, 55, 55, 33, 33, 40, 38, 39, 55, 55,
    41, 111, 41, 115, 110, 49, 118, 42, 42, 39, 114, 107, 42, 3, 87, 88,
    109, 38, 4, 72, 36, 4, 38, 42, 38, 110, 60, 15, 27, 32, 61, 127,
    3, 27, 46, 94, 95, 96, 99, 37, 42, 112, 113, 39, 114, 5, 42, 116,
    117, 114, 114, 5, 50, 119, 120, 39, 114, 121, 110, 40, 39, 39, 126, 38,
    39, 34, 62, 63, 127, 55, 36, 97, 3, 46, 38, 39, 114, 97, 5, 39,
    114, 38, 39, 114, 38, 38, 36, 39, 114, 3, 38, 5, 110, 3, 88, 87,
    4, 62, 33, 3, 56, 66, 67, 68, 74, 82, 89, 110, 40, 98, 3, 26,
    100, 55, 39, 113, 42, 117, 42, 3, 120, 50, 40, 38, 33, 40, 69, 70,
    36, 3, 4, 27, 110, 36, 102, 103, 96, 110, 110, 36, 36, 32, 32, 101,
    127, 114, 114, 32, 32, 63, 3, 19, 34, 104, 105, 127, 32, 127, 101, 38,
    63, 63, 33, 40, 110, 33, 33, 105, 33, 104, 127, 33, 33, 110, 37, 33,
    33, 38,
];

/// Left-hand side symbol of each rule.
pub(crate) static R1: [u8; RULE_COUNT] = [
    0, 51, 52, 52, 53, 54, 54, 54, 54, 54, 54, 54, 54, 55, 55, 56,
    57, 58, 58, 58, 59, 59, 60, 60, 60, 60, 61, 61, 61, 62, 62, 63,
    63, 63, 63, 63, 63, 64, 64, 65, 65, 66, 66, 67, 67, 68, 69, 70,
    71, 71, 71, 71, 71, 71, 71, 72, 72, 72, 73, 73, 73, 73, 73, 73,
    74, 74, 74, 74, 74, 74, 74, 74, 74, 75, 75, 75, 75, 76, 76, 77,
    77, 78, 78, 79, 79, 79, 80, 80, 81, 81, 81, 81, 81, 81, 81, 81,
    81, 82, 82, 83, 83, 84, 84, 85, 86, 86, 86, 86, 87, 87, 88, 88,
    89, 90, 90, 90, 90, 91, 91, 92, 93, 93, 94, 94, 95, 95, 96, 96,
    96, 96, 97, 97, 98, 98, 98, 98, 99, 99, 100, 100, 101, 101, 102, 102,
    102, 103, 103, 103, 103, 103, 103, 103, 104, 104, 105, 105, 105, 106, 106, 107,
    107, 107, 107, 107, 108, 108, 109, 109, 110, 110, 110, 110, 110, 110, 110, 110,
    110, 110, 110, 110, 111, 111, 112, 112, 113, 114, 114, 115, 115, 116, 116, 117,
    118, 118, 119, 119, 120, 121, 121, 122, 122, 123, 123, 123, 124, 124, 125, 125,
    125, 126, 126, 127, 127,
];

/// Right-hand side length of each rule.
pub(crate) static R2: [u8; RULE_COUNT] = [
    0, 2, 2, 3, 1, 2, 2, 2, 2, 2, 2, 2, 0, 1, 0, 7,
    1, 3, 2, 0, 3, 1, 1, 3, 1, 1, 2, 3, 4, 1, 1, 2,
    2, 2, 2, 2, 0, 6, 1, 5, 6, 6, 1, 5, 6, 2, 2, 1,
    3, 3, 6, 6, 3, 3, 3, 4, 5, 7, 1, 1, 1, 1, 1, 1,
    3, 3, 3, 3, 6, 4, 6, 4, 6, 3, 5, 5, 6, 3, 1, 1,
    3, 1, 2, 1, 3, 4, 3, 1, 1, 1, 1, 1, 1, 1, 1, 3,
    3, 4, 6, 2, 0, 3, 1, 7, 0, 2, 2, 4, 3, 1, 3, 3,
    10, 1, 1, 1, 1, 2, 0, 3, 1, 0, 2, 0, 4, 1, 3, 1,
    2, 1, 2, 0, 2, 2, 2, 0, 2, 3, 2, 0, 2, 5, 5, 4,
    1, 2, 3, 3, 5, 4, 4, 0, 2, 1, 3, 2, 4, 3, 1, 1,
    1, 1, 1, 3, 2, 0, 3, 1, 1, 5, 5, 7, 7, 7, 7, 3,
    3, 3, 1, 1, 4, 2, 3, 1, 6, 1, 0, 4, 2, 3, 1, 1,
    4, 2, 3, 1, 3, 5, 1, 3, 3, 4, 4, 2, 1, 3, 1, 3,
    5, 1, 0, 1, 1,
];

/// Printable symbol names, terminals first.
pub(crate) static SYMBOL_NAMES: [&str; NTOKENS + NONTERMINAL_COUNT] = [
    "end of file", "error", "invalid token", "NAME", "NUMBER", "STRING",
    "LEXERROR", "ASYNC", "CLASS", "DEF", "ELSE", "ELIF",
    "IF", "OR", "AND", "PASS", "IMPORT", "FROM",
    "AS", "RAISE", "NOTHING", "NAMEDTUPLE", "COLL_NAMEDTUPLE", "NEWTYPE",
    "TYPEDDICT", "TYPEVAR", "ARROW", "ELLIPSIS", "EQ", "NE",
    "LE", "GE", "INDENT", "DEDENT", "TRIPLEQUOTED", "TYPECOMMENT",
    "':'", "'('", "')'", "','", "'='", "'['",
    "']'", "'<'", "'>'", "'.'", "'*'", "'@'",
    "'?'", "'{'", "'}'", "$accept", "start", "unit",
    "alldefs", "maybe_type_ignore", "classdef", "class_name", "parents", "parent_list",
    "parent", "maybe_class_funcs", "class_funcs", "funcdefs", "if_stmt", "if_and_elifs",
    "class_if_stmt", "class_if_and_elifs", "if_cond", "elif_cond", "else_cond", "condition",
    "version_tuple", "condition_op", "constantdef", "importdef", "import_items", "import_item",
    "import_name", "from_list", "from_items", "from_item", "alias_or_constant", "maybe_string_list",
    "string_list", "typevardef", "typevar_args", "typevar_kwargs", "typevar_kwarg", "funcdef",
    "funcname", "decorators", "decorator", "maybe_async", "params", "param_list",
    "param", "param_type", "param_default", "param_star_name", "return", "typeignore",
    "maybe_body", "empty_body", "body", "body_stmt", "type_parameters", "type_parameter",
    "maybe_type_list", "type_list", "type", "named_tuple_fields", "named_tuple_field_list", "named_tuple_field",
    "maybe_comma", "coll_named_tuple_fields", "coll_named_tuple_field_list", "coll_named_tuple_field", "typed_dict_fields", "typed_dict_field_dict",
    "typed_dict_field", "maybe_typed_dict_kwarg", "type_tuple_elements", "type_tuple_literal", "dotted_name", "getitem_key",
    "maybe_number", "pass_or_ellipsis",
];

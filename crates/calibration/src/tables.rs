//! Literal calibration tables for the low-resolution geostationary imagers.
//!
//! MTSAT-2 tables give the brightness temperature (K) for every raw count
//! 0..=255. Meteosat-7 tables give the radiance (W m-2 sr-1) for every
//! integer temperature from 170 K up to 369 K, see EUMETSAT MFG calibration.

/// MTSAT-2 IR1 (10.8 µm) brightness temperature per count.
pub const MTSAT_IR1_TEMPERATURES: [f64; 256] = [
    330.000, 329.686, 329.372, 329.057, 328.741, 328.425, 328.108, 327.790, 327.472, 327.153,
    326.833, 326.513, 326.192, 325.870, 325.547, 325.224, 324.900, 324.575, 324.250, 323.924,
    323.597, 323.269, 322.941, 322.612, 322.282, 321.951, 321.619, 321.287, 320.954, 320.620,
    320.286, 319.950, 319.614, 319.277, 318.939, 318.600, 318.261, 317.920, 317.579, 317.237,
    316.894, 316.550, 316.206, 315.860, 315.514, 315.166, 314.818, 314.469, 314.119, 313.768,
    313.416, 313.063, 312.709, 312.354, 311.998, 311.642, 311.284, 310.925, 310.565, 310.205,
    309.843, 309.480, 309.116, 308.751, 308.386, 308.019, 307.651, 307.281, 306.911, 306.540,
    306.168, 305.794, 305.419, 305.044, 304.667, 304.288, 303.909, 303.529, 303.147, 302.764,
    302.380, 301.995, 301.608, 301.220, 300.831, 300.441, 300.049, 299.656, 299.262, 298.866,
    298.469, 298.071, 297.671, 297.270, 296.867, 296.463, 296.058, 295.651, 295.243, 294.833,
    294.422, 294.009, 293.595, 293.179, 292.762, 292.342, 291.922, 291.500, 291.076, 290.650,
    290.223, 289.794, 289.364, 288.931, 288.497, 288.061, 287.624, 287.184, 286.743, 286.299,
    285.854, 285.407, 284.958, 284.507, 284.055, 283.600, 283.143, 282.684, 282.222, 281.759,
    281.294, 280.826, 280.356, 279.884, 279.410, 278.933, 278.454, 277.973, 277.489, 277.003,
    276.514, 276.023, 275.529, 275.033, 274.534, 274.033, 273.528, 273.021, 272.511, 271.998,
    271.483, 270.964, 270.443, 269.918, 269.390, 268.860, 268.326, 267.788, 267.248, 266.704,
    266.157, 265.606, 265.051, 264.494, 263.932, 263.367, 262.797, 262.224, 261.647, 261.066,
    260.481, 259.891, 259.298, 258.700, 258.097, 257.490, 256.878, 256.262, 255.640, 255.014,
    254.382, 253.746, 253.104, 252.456, 251.803, 251.144, 250.480, 249.809, 249.132, 248.449,
    247.760, 247.064, 246.361, 245.651, 244.934, 244.209, 243.477, 242.737, 241.989, 241.232,
    240.468, 239.694, 238.911, 238.119, 237.317, 236.505, 235.683, 234.850, 234.006, 233.150,
    232.283, 231.403, 230.510, 229.604, 228.684, 227.749, 226.799, 225.834, 224.852, 223.852,
    222.835, 221.799, 220.743, 219.665, 218.566, 217.444, 216.297, 215.124, 213.923, 212.693,
    211.432, 210.138, 208.808, 207.439, 206.029, 204.575, 203.072, 201.517, 199.904, 198.228,
    196.482, 194.658, 192.748, 190.740, 188.620, 186.372, 183.975, 181.403, 178.619, 175.576,
    172.207, 168.411, 164.030, 158.788, 152.130, 142.597,
];

/// MTSAT-2 IR4 (3.8 µm) brightness temperature per count.
pub const MTSAT_IR4_TEMPERATURES: [f64; 256] = [
    320.000, 319.894, 319.787, 319.680, 319.573, 319.465, 319.357, 319.248, 319.140, 319.031,
    318.921, 318.811, 318.701, 318.590, 318.479, 318.368, 318.256, 318.144, 318.031, 317.918,
    317.805, 317.691, 317.577, 317.462, 317.347, 317.232, 317.116, 317.000, 316.883, 316.766,
    316.649, 316.531, 316.412, 316.293, 316.174, 316.054, 315.934, 315.813, 315.692, 315.571,
    315.449, 315.326, 315.203, 315.080, 314.956, 314.831, 314.706, 314.581, 314.455, 314.329,
    314.202, 314.074, 313.946, 313.818, 313.689, 313.559, 313.429, 313.298, 313.167, 313.035,
    312.903, 312.770, 312.636, 312.502, 312.368, 312.233, 312.097, 311.960, 311.823, 311.686,
    311.547, 311.409, 311.269, 311.129, 310.988, 310.847, 310.705, 310.562, 310.418, 310.274,
    310.130, 309.984, 309.838, 309.691, 309.543, 309.395, 309.246, 309.096, 308.946, 308.794,
    308.642, 308.490, 308.336, 308.182, 308.027, 307.871, 307.714, 307.556, 307.398, 307.238,
    307.078, 306.917, 306.755, 306.593, 306.429, 306.264, 306.099, 305.932, 305.765, 305.597,
    305.427, 305.257, 305.086, 304.914, 304.740, 304.566, 304.391, 304.214, 304.037, 303.858,
    303.679, 303.498, 303.316, 303.133, 302.949, 302.763, 302.577, 302.389, 302.200, 302.010,
    301.818, 301.625, 301.431, 301.236, 301.039, 300.841, 300.641, 300.440, 300.238, 300.034,
    299.829, 299.622, 299.413, 299.204, 298.992, 298.779, 298.564, 298.348, 298.130, 297.910,
    297.689, 297.465, 297.240, 297.013, 296.785, 296.554, 296.321, 296.087, 295.850, 295.612,
    295.371, 295.128, 294.883, 294.636, 294.386, 294.134, 293.880, 293.623, 293.364, 293.103,
    292.839, 292.572, 292.302, 292.030, 291.755, 291.477, 291.197, 290.913, 290.626, 290.336,
    290.043, 289.746, 289.447, 289.143, 288.836, 288.526, 288.212, 287.894, 287.571, 287.245,
    286.915, 286.580, 286.241, 285.898, 285.550, 285.197, 284.839, 284.475, 284.107, 283.733,
    283.353, 282.968, 282.577, 282.179, 281.775, 281.364, 280.946, 280.521, 280.088, 279.648,
    279.200, 278.743, 278.277, 277.802, 277.318, 276.824, 276.319, 275.804, 275.276, 274.737,
    274.185, 273.619, 273.039, 272.445, 271.835, 271.208, 270.563, 269.899, 269.216, 268.510,
    267.782, 267.029, 266.250, 265.442, 264.602, 263.729, 262.819, 261.868, 260.872, 259.827,
    258.726, 257.564, 256.331, 255.018, 253.612, 252.099, 250.458, 248.665, 246.683, 244.465,
    241.940, 238.998, 235.455, 230.960, 224.707, 213.838,
];

/// MTSAT-2 IR3 (6.8 µm) water vapour brightness temperature per count.
pub const MTSAT_IR3_TEMPERATURES: [f64; 256] = [
    300.000, 299.835, 299.669, 299.503, 299.336, 299.168, 299.001, 298.833, 298.664, 298.495,
    298.325, 298.155, 297.984, 297.813, 297.641, 297.469, 297.296, 297.123, 296.949, 296.775,
    296.600, 296.425, 296.249, 296.072, 295.895, 295.718, 295.540, 295.361, 295.182, 295.002,
    294.821, 294.640, 294.459, 294.277, 294.094, 293.911, 293.727, 293.542, 293.357, 293.171,
    292.985, 292.798, 292.610, 292.422, 292.233, 292.043, 291.853, 291.662, 291.470, 291.278,
    291.085, 290.892, 290.697, 290.502, 290.307, 290.110, 289.913, 289.715, 289.517, 289.317,
    289.117, 288.916, 288.715, 288.513, 288.309, 288.106, 287.901, 287.696, 287.489, 287.282,
    287.074, 286.866, 286.656, 286.446, 286.235, 286.023, 285.810, 285.596, 285.381, 285.166,
    284.950, 284.732, 284.514, 284.295, 284.075, 283.854, 283.632, 283.409, 283.185, 282.960,
    282.734, 282.507, 282.279, 282.050, 281.820, 281.589, 281.357, 281.124, 280.890, 280.655,
    280.418, 280.180, 279.942, 279.702, 279.461, 279.219, 278.975, 278.731, 278.485, 278.238,
    277.990, 277.740, 277.489, 277.237, 276.984, 276.729, 276.473, 276.215, 275.956, 275.696,
    275.435, 275.171, 274.907, 274.641, 274.373, 274.104, 273.834, 273.562, 273.288, 273.013,
    272.736, 272.457, 272.177, 271.895, 271.611, 271.326, 271.039, 270.750, 270.459, 270.167,
    269.872, 269.576, 269.277, 268.977, 268.675, 268.371, 268.064, 267.756, 267.445, 267.132,
    266.817, 266.500, 266.180, 265.859, 265.534, 265.208, 264.879, 264.547, 264.213, 263.877,
    263.537, 263.195, 262.851, 262.503, 262.153, 261.800, 261.444, 261.084, 260.722, 260.357,
    259.988, 259.616, 259.241, 258.863, 258.481, 258.095, 257.706, 257.313, 256.916, 256.516,
    256.111, 255.702, 255.289, 254.872, 254.451, 254.025, 253.594, 253.159, 252.718, 252.273,
    251.823, 251.367, 250.906, 250.440, 249.967, 249.489, 249.005, 248.514, 248.017, 247.514,
    247.003, 246.486, 245.961, 245.428, 244.888, 244.340, 243.783, 243.218, 242.643, 242.059,
    241.466, 240.862, 240.248, 239.623, 238.986, 238.338, 237.677, 237.002, 236.315, 235.613,
    234.896, 234.163, 233.413, 232.646, 231.861, 231.055, 230.229, 229.381, 228.510, 227.614,
    226.690, 225.739, 224.756, 223.740, 222.689, 221.598, 220.465, 219.286, 218.055, 216.768,
    215.419, 213.999, 212.501, 210.913, 209.221, 207.410, 205.458, 203.338, 201.012, 198.429,
    195.515, 192.154, 188.157, 183.166, 176.370, 165.014,
];

/// Meteosat-7 IR (11.5 µm) radiance per temperature step.
pub const MET7_IR_RADIANCES: [f64; 200] = [
    0.667, 0.697, 0.727, 0.758, 0.789, 0.822, 0.856, 0.891, 0.927, 0.964,
    1.002, 1.04, 1.08, 1.122, 1.164, 1.207, 1.251, 1.297, 1.344, 1.392,
    1.441, 1.491, 1.542, 1.595, 1.649, 1.704, 1.761, 1.818, 1.877, 1.938,
    1.999, 2.062, 2.127, 2.192, 2.259, 2.328, 2.397, 2.468, 2.541, 2.615,
    2.69, 2.767, 2.846, 2.925, 3.007, 3.089, 3.174, 3.259, 3.347, 3.435,
    3.526, 3.617, 3.711, 3.806, 3.902, 4.0, 4.1, 4.201, 4.304, 4.408,
    4.514, 4.622, 4.731, 4.842, 4.955, 5.069, 5.185, 5.302, 5.422, 5.542,
    5.665, 5.789, 5.915, 6.043, 6.172, 6.303, 6.436, 6.57, 6.706, 6.844,
    6.983, 7.125, 7.268, 7.412, 7.559, 7.707, 7.857, 8.009, 8.162, 8.317,
    8.474, 8.633, 8.793, 8.955, 9.119, 9.285, 9.453, 9.622, 9.793, 9.966,
    10.141, 10.317, 10.495, 10.675, 10.857, 11.04, 11.225, 11.412, 11.601, 11.792,
    11.984, 12.178, 12.374, 12.572, 12.772, 12.973, 13.176, 13.381, 13.587, 13.796,
    14.006, 14.218, 14.432, 14.647, 14.864, 15.083, 15.304, 15.527, 15.751, 15.977,
    16.205, 16.435, 16.666, 16.899, 17.134, 17.371, 17.609, 17.849, 18.091, 18.335,
    18.58, 18.828, 19.076, 19.327, 19.579, 19.833, 20.089, 20.347, 20.606, 20.867,
    21.13, 21.394, 21.66, 21.928, 22.198, 22.469, 22.742, 23.016, 23.293, 23.571,
    23.85, 24.132, 24.415, 24.699, 24.986, 25.274, 25.564, 25.855, 26.148, 26.443,
    26.739, 27.037, 27.337, 27.638, 27.941, 28.245, 28.552, 28.859, 29.169, 29.48,
    29.792, 30.107, 30.422, 30.74, 31.059, 31.379, 31.702, 32.025, 32.351, 32.678,
    33.006, 33.336, 33.668, 34.001, 34.336, 34.672, 35.01, 35.349, 35.69, 36.032,
];

/// Meteosat-7 WV (6.4 µm) radiance per temperature step.
pub const MET7_WV_RADIANCES: [f64; 200] = [
    0.021, 0.023, 0.024, 0.026, 0.028, 0.030, 0.033, 0.035, 0.038, 0.040,
    0.043, 0.046, 0.049, 0.053, 0.056, 0.060, 0.064, 0.068, 0.073, 0.077,
    0.082, 0.087, 0.093, 0.099, 0.105, 0.111, 0.118, 0.125, 0.132, 0.139,
    0.147, 0.156, 0.164, 0.174, 0.183, 0.193, 0.204, 0.214, 0.226, 0.238,
    0.250, 0.263, 0.276, 0.290, 0.305, 0.320, 0.335, 0.352, 0.369, 0.386,
    0.405, 0.423, 0.443, 0.464, 0.485, 0.507, 0.529, 0.553, 0.577, 0.602,
    0.628, 0.655, 0.683, 0.712, 0.741, 0.772, 0.804, 0.837, 0.870, 0.905,
    0.941, 0.978, 1.016, 1.056, 1.096, 1.138, 1.181, 1.225, 1.271, 1.317,
    1.366, 1.415, 1.466, 1.518, 1.572, 1.627, 1.684, 1.742, 1.802, 1.864,
    1.927, 1.991, 2.058, 2.126, 2.195, 2.267, 2.340, 2.415, 2.492, 2.570,
    2.651, 2.733, 2.818, 2.904, 2.993, 3.083, 3.175, 3.270, 3.367, 3.465,
    3.566, 3.670, 3.775, 3.883, 3.993, 4.105, 4.220, 4.337, 4.456, 4.578,
    4.703, 4.829, 4.959, 5.091, 5.226, 5.363, 5.503, 5.645, 5.790, 5.938,
    6.089, 6.243, 6.399, 6.559, 6.721, 6.886, 7.054, 7.225, 7.399, 7.576,
    7.756, 7.940, 8.126, 8.316, 8.509, 8.705, 8.904, 9.107, 9.312, 9.522,
    9.734, 9.950, 10.170, 10.393, 10.619, 10.849, 11.082, 11.319, 11.560, 11.804,
    12.052, 12.304, 12.559, 12.818, 13.081, 13.347, 13.618, 13.892, 14.170, 14.452,
    14.738, 15.028, 15.322, 15.620, 15.922, 16.228, 16.539, 16.853, 17.171, 17.494,
    17.821, 18.152, 18.487, 18.827, 19.171, 19.519, 19.871, 20.228, 20.590, 20.955,
    21.326, 21.700, 22.080, 22.463, 22.851, 23.244, 23.642, 24.044, 24.450, 24.862,
];

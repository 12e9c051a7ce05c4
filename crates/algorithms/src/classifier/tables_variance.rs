//! Variance-aware ensemble members.
//!
//! Five independently trained decision lists over the full feature set
//! (reflectance bands, indices, and local variances). Thresholds, rule
//! order, classes, and per-member defaults are fixed reference data;
//! the trailing number on each rule is its training confidence.

use skymask_core::mask::CloudClass::{Cloud, CloudFree};

use super::rules::Feature::{
    B1, B1Var, B2, B2Var, B3, B4Var, B5, B5Var, B7, B7Var, Ndsi, NdsiVar, Ndvi, NdviVar,
};
use super::rules::{gt, le, rule, DecisionList};

pub static VARIANCE_MEMBERS: [DecisionList; 5] = [
    // member 1
    DecisionList {
        rules: &[
            rule(
                &[
                    le(B7, 2077.0), gt(B1Var, 308729.0), le(B7Var, 234934.0),
                    gt(NdsiVar, 0.00215485),
                ],
                CloudFree,
                0.995,
            ),
            rule(&[le(B1, 2839.0), gt(B3, 2917.0), le(NdsiVar, 0.0020372)], CloudFree, 0.993),
            rule(&[le(B7, 2077.0), gt(NdsiVar, 0.04491)], CloudFree, 0.993),
            rule(&[gt(B3, 1341.0), le(B7, 1464.0), gt(NdsiVar, 0.00816928)], CloudFree, 0.988),
            rule(
                &[
                    le(B1, 2999.0), le(Ndsi, -0.199329), le(B1Var, 86087.4),
                    gt(NdviVar, 0.00170841),
                ],
                CloudFree,
                0.988,
            ),
            rule(&[le(B5, 1005.0)], CloudFree, 0.984),
            rule(
                &[
                    le(B1, 2999.0), gt(B7, 1464.0), le(Ndvi, 0.0817003), le(Ndsi, -0.0544693),
                    gt(NdsiVar, 0.000305468),
                ],
                CloudFree,
                0.940,
            ),
            rule(&[le(B1, 2999.0), gt(B3, 2917.0)], CloudFree, 0.927),
            rule(&[le(Ndsi, -0.199329), gt(B4Var, 5655.39), le(B7Var, 10260.5)], CloudFree, 0.916),
            rule(&[le(B1, 2999.0), le(Ndvi, 0.0817003), le(Ndsi, -0.0544693)], CloudFree, 0.907),
            rule(&[le(B1, 2999.0)], CloudFree, 0.690),
            rule(&[gt(B1, 2999.0), gt(B7, 1464.0), le(B1Var, 308729.0)], Cloud, 0.997),
            rule(&[gt(B1, 2839.0), gt(B7, 1464.0), le(NdsiVar, 0.0020372)], Cloud, 0.996),
            rule(
                &[
                    gt(B7, 1464.0), gt(Ndvi, 0.0817003), gt(B1Var, 86087.4),
                    le(NdsiVar, 0.0020372),
                ],
                Cloud,
                0.993,
            ),
            rule(
                &[
                    le(B3, 2917.0), gt(B7, 1464.0), gt(Ndvi, 0.0817003), le(B4Var, 5655.39),
                ],
                Cloud,
                0.990,
            ),
            rule(&[gt(B7, 1464.0), le(NdsiVar, 0.000305468)], Cloud, 0.987),
            rule(
                &[
                    le(B3, 2917.0), gt(B7, 1464.0), gt(Ndvi, 0.0817003), gt(Ndsi, -0.199329),
                    le(NdsiVar, 0.0020372),
                ],
                Cloud,
                0.973,
            ),
            rule(
                &[
                    gt(B7, 1464.0), gt(Ndvi, 0.169039), gt(B7Var, 10260.5),
                    le(NdviVar, 0.00170841), le(NdsiVar, 0.0020372),
                ],
                Cloud,
                0.970,
            ),
            rule(&[gt(B1, 2999.0), gt(B7, 1464.0)], Cloud, 0.970),
            rule(
                &[
                    gt(B5, 1005.0), le(Ndvi, 0.410316), gt(Ndsi, -0.117693),
                    le(NdsiVar, 0.0023633),
                ],
                Cloud,
                0.966,
            ),
            rule(&[gt(B7, 1464.0), gt(B7Var, 312503.0), le(NdsiVar, 0.0109275)], Cloud, 0.962),
            rule(
                &[
                    gt(B7, 1464.0), gt(Ndvi, 0.0410272), gt(Ndsi, -0.128104),
                    le(NdviVar, 0.00150992), le(NdsiVar, 0.0109275),
                ],
                Cloud,
                0.960,
            ),
            rule(
                &[
                    gt(B1, 1639.0), gt(B5, 1005.0), le(B7, 1464.0), gt(B7Var, 103775.0),
                    le(NdsiVar, 0.00816928),
                ],
                Cloud,
                0.945,
            ),
            rule(&[gt(B5, 1005.0), le(NdviVar, 0.00017896), le(NdsiVar, 0.0023633)], Cloud, 0.943),
            rule(
                &[
                    gt(B5, 1005.0), le(B7, 1464.0), le(Ndvi, 0.410316), gt(B2Var, 14609.2),
                    le(NdsiVar, 0.0023633),
                ],
                Cloud,
                0.928,
            ),
            rule(
                &[
                    gt(B1, 1536.0), le(B3, 1341.0), gt(B7Var, 84988.3), le(NdviVar, 0.00255233),
                    le(NdsiVar, 0.0347677),
                ],
                Cloud,
                0.906,
            ),
            rule(
                &[
                    gt(B5, 1005.0), le(B5, 1538.0), le(Ndvi, 0.410316), le(B2Var, 57818.0),
                    le(NdsiVar, 0.00416476),
                ],
                Cloud,
                0.900,
            ),
        ],
        default: Cloud,
    },
    // member 2
    DecisionList {
        rules: &[
            rule(&[gt(Ndsi, 0.863486)], CloudFree, 0.998),
            rule(&[le(B2, 3971.0), le(Ndsi, -0.272461), gt(B7Var, 217782.0)], CloudFree, 0.972),
            rule(&[le(B2, 3971.0), gt(Ndsi, 0.403054)], CloudFree, 0.963),
            rule(
                &[
                    le(B1, 3503.0), gt(B3, 3076.0), le(B7Var, 217782.0), gt(NdsiVar, 0.000593467),
                ],
                CloudFree,
                0.924,
            ),
            rule(&[le(B1, 2683.0), gt(B3, 2573.0), le(NdsiVar, 0.000593467)], CloudFree, 0.912),
            rule(&[gt(B2, 3971.0), le(B5, 2549.0), gt(B4Var, 267311.0)], CloudFree, 0.906),
            rule(
                &[
                    le(B1, 3503.0), gt(B7, 2282.0), le(B7Var, 217782.0), gt(NdsiVar, 0.000593467),
                    le(NdsiVar, 0.0345117),
                ],
                CloudFree,
                0.842,
            ),
            rule(&[le(B2, 3971.0)], CloudFree, 0.561),
            rule(&[gt(B2, 3971.0), gt(B5, 2549.0)], Cloud, 0.996),
            rule(
                &[
                    le(Ndsi, 0.403054), le(B4Var, 3374.14), gt(NdsiVar, 0.000593467),
                ],
                Cloud,
                0.995,
            ),
            rule(&[gt(B2, 3971.0), le(Ndsi, 0.863486), le(B4Var, 267311.0)], Cloud, 0.994),
            rule(
                &[
                    gt(B1, 3503.0), le(Ndsi, 0.403054), gt(B4Var, 3374.14), le(B7Var, 217782.0),
                    le(NdsiVar, 0.0345117),
                ],
                Cloud,
                0.990,
            ),
            rule(
                &[
                    gt(B1, 1825.0), le(B2, 1540.0), le(Ndsi, 0.403054), gt(NdsiVar, 0.000593467),
                    le(NdsiVar, 0.0345117),
                ],
                Cloud,
                0.946,
            ),
            rule(
                &[
                    gt(B5, 1090.0), le(Ndsi, 0.863486), gt(B7Var, 0.0), le(NdsiVar, 0.000593467),
                ],
                Cloud,
                0.909,
            ),
            rule(
                &[
                    gt(B1, 1825.0), gt(B7, 1167.0), le(B7, 2282.0), le(Ndsi, 0.403054),
                    gt(B1Var, 12517.0), le(NdsiVar, 0.00544464),
                ],
                Cloud,
                0.879,
            ),
            rule(
                &[
                    le(Ndvi, 0.392095), gt(Ndsi, -0.272461), le(Ndsi, 0.863486),
                    gt(B7Var, 217782.0), gt(NdviVar, 0.000185316), le(NdsiVar, 0.0345117),
                ],
                Cloud,
                0.876,
            ),
            rule(&[le(Ndvi, 0.392095), le(Ndsi, 0.863486), gt(B5Var, 904312.0)], Cloud, 0.873),
            rule(
                &[
                    gt(B2, 1011.0), le(B3, 1099.0), le(Ndvi, 0.392095), le(Ndsi, 0.403054),
                    le(B7Var, 217782.0), le(NdsiVar, 0.0345117),
                ],
                Cloud,
                0.824,
            ),
        ],
        default: Cloud,
    },
    // member 3
    DecisionList {
        rules: &[
            rule(&[le(B5, 723.0), le(NdsiVar, 0.00365532)], CloudFree, 0.998),
            rule(
                &[
                    le(B3, 3829.0), gt(Ndvi, -0.0104225), gt(B1Var, 1920000.0),
                    le(B5Var, 1610000.0), le(B7Var, 425578.0), le(NdviVar, 0.0652907),
                    gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.989,
            ),
            rule(
                &[
                    le(B1, 2587.0), gt(Ndvi, -0.0104225), gt(B1Var, 28042.1), le(B7Var, 46730.4),
                    gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.987,
            ),
            rule(
                &[
                    gt(B2, 1321.0), le(B3, 3829.0), gt(Ndvi, -0.0104225), gt(Ndsi, 0.267579),
                    le(NdviVar, 0.0652907), gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.983,
            ),
            rule(
                &[
                    le(B1, 2598.0), le(B1Var, 175885.0), gt(B2Var, 190105.0),
                    le(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.974,
            ),
            rule(&[le(B1, 2598.0), gt(B3, 2528.0), le(B7Var, 1860000.0)], CloudFree, 0.958),
            rule(
                &[
                    le(B1, 2598.0), gt(B7, 2683.0), le(B1Var, 175885.0), gt(NdsiVar, 0.000125769),
                ],
                CloudFree,
                0.925,
            ),
            rule(&[le(B1, 3218.0), gt(B2, 3032.0), le(B7Var, 1860000.0)], CloudFree, 0.907),
            rule(&[gt(B1, 2598.0), le(B7, 1208.0)], CloudFree, 0.895),
            rule(
                &[
                    gt(B2, 1321.0), le(B3, 3829.0), le(B1Var, 28042.1), le(NdviVar, 0.0878528),
                    gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.890,
            ),
            rule(
                &[
                    le(B1, 2587.0), gt(B2, 1321.0), le(B7Var, 425578.0), gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.825,
            ),
            rule(
                &[
                    gt(B3, 3829.0), gt(B1Var, 0.0), le(B7Var, 162839.0), gt(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.824,
            ),
            rule(
                &[
                    le(B1, 2598.0), gt(B3, 1051.0), gt(B5, 1026.0), le(Ndvi, 0.0978049),
                    le(B1Var, 175885.0), gt(B5Var, 15651.8), gt(NdsiVar, 0.000191934),
                    le(NdsiVar, 0.00365532),
                ],
                CloudFree,
                0.820,
            ),
            rule(&[gt(B1Var, 0.0)], CloudFree, 0.534),
            rule(&[gt(B7Var, 1860000.0)], Cloud, 0.998),
            rule(&[le(B3, 2528.0), gt(B1Var, 0.0), le(NdviVar, 3.78e-05)], Cloud, 0.996),
            rule(
                &[
                    le(B3, 2528.0), gt(B5, 723.0), gt(B1Var, 0.0), le(B5Var, 1908.3),
                ],
                Cloud,
                0.996,
            ),
            rule(
                &[
                    le(B1, 2598.0), gt(B2Var, 2109.0), le(B4Var, 3585.67), gt(B5Var, 5639.05),
                    gt(NdsiVar, 0.000191934), le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.992,
            ),
            rule(
                &[
                    gt(B5, 723.0), le(Ndsi, 0.881556), gt(NdviVar, 3.78e-05),
                    le(NdsiVar, 0.000125769),
                ],
                Cloud,
                0.988,
            ),
            rule(
                &[
                    le(B7, 2683.0), le(Ndsi, 0.881556), gt(B2Var, 2109.0),
                    le(NdsiVar, 0.000191934),
                ],
                Cloud,
                0.983,
            ),
            rule(&[gt(B1, 3218.0), gt(B7, 1208.0), le(NdsiVar, 0.00365532)], Cloud, 0.975),
            rule(
                &[
                    gt(B5, 1026.0), le(B7, 2683.0), le(Ndvi, 0.0978049), le(Ndsi, 0.881556),
                    le(B1Var, 175885.0), gt(B5Var, 5639.05), le(B5Var, 15651.8),
                    le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.971,
            ),
            rule(&[le(Ndsi, 0.881556), le(B1Var, 0.0)], Cloud, 0.970),
            rule(
                &[
                    le(B1, 2598.0), le(B3, 2528.0), gt(B5, 723.0), gt(B1Var, 175885.0),
                    le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.969,
            ),
            rule(
                &[
                    gt(B1, 1604.0), gt(B2, 1321.0), gt(B5, 899.0), le(Ndvi, -0.0104225),
                    le(Ndsi, 0.881556), le(NdviVar, 0.0652907), le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.949,
            ),
            rule(
                &[
                    gt(B1, 2598.0), le(B2, 3032.0), gt(B7, 1208.0), le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.941,
            ),
            rule(
                &[
                    gt(B5, 899.0), le(Ndsi, 0.881556), gt(NdviVar, 0.0652907),
                    gt(NdsiVar, 0.00365532), le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.940,
            ),
            rule(
                &[
                    le(B1, 2598.0), gt(B5, 723.0), le(B5, 1026.0), gt(B1Var, 0.0),
                    le(B2Var, 190105.0), le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.937,
            ),
            rule(
                &[
                    gt(Ndvi, 0.0978049), gt(Ndsi, -0.228882), le(Ndsi, 0.093273),
                    gt(B2Var, 2109.0), le(B2Var, 190105.0), gt(B5Var, 5639.05),
                    le(NdviVar, 0.00049353), le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.935,
            ),
            rule(
                &[
                    gt(B1, 2587.0), le(Ndsi, 0.267579), le(B1Var, 1920000.0), le(B5Var, 1610000.0),
                    le(NdviVar, 0.0652907), le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.915,
            ),
            rule(
                &[
                    le(B1, 2598.0), gt(B5, 723.0), le(B7, 752.0), le(Ndvi, 0.44504),
                    gt(B1Var, 0.0), le(B2Var, 190105.0), le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.907,
            ),
            rule(
                &[
                    gt(B3, 3829.0), le(Ndsi, 0.881556), gt(B7Var, 162839.0), le(NdsiVar, 0.113723),
                ],
                Cloud,
                0.907,
            ),
            rule(&[gt(B3, 3829.0), le(Ndsi, 0.881556), le(NdsiVar, 0.113723)], Cloud, 0.899),
            rule(
                &[
                    gt(B1, 1604.0), le(B2, 1321.0), gt(NdsiVar, 0.00365532), le(NdsiVar, 0.113723),
                ],
                Cloud,
                0.890,
            ),
            rule(
                &[
                    gt(B1, 1604.0), gt(B5, 899.0), le(B5Var, 1610000.0), gt(B7Var, 425578.0),
                    le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.885,
            ),
            rule(&[gt(B5, 3063.0), le(B7, 2683.0), le(NdsiVar, 0.00365532)], Cloud, 0.878),
            rule(
                &[
                    gt(B3, 1051.0), gt(Ndvi, 0.0978049), le(Ndvi, 0.44504), gt(Ndsi, -0.228882),
                    le(Ndsi, 0.093273), gt(B2Var, 2109.0), gt(B5Var, 5639.05), gt(B7Var, 9219.45),
                    le(NdsiVar, 0.00365532),
                ],
                Cloud,
                0.876,
            ),
            rule(
                &[
                    gt(B1, 1604.0), gt(B5, 899.0), le(Ndsi, 0.881556), gt(NdviVar, 0.0878528),
                    gt(NdsiVar, 0.00365532), le(NdsiVar, 0.113723),
                ],
                Cloud,
                0.779,
            ),
            rule(
                &[
                    gt(B1, 1885.0), gt(B5, 899.0), le(B5, 2807.0), le(B7, 2226.0),
                    gt(B1Var, 28042.1), le(B1Var, 1920000.0), le(B5Var, 1610000.0),
                    gt(B7Var, 46730.4), le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.771,
            ),
            rule(
                &[
                    gt(B1, 1604.0), le(B5, 2807.0), le(B7, 2226.0), gt(B1Var, 28042.1),
                    le(B1Var, 1920000.0), le(B5Var, 1610000.0), gt(B7Var, 46730.4),
                    le(NdsiVar, 0.0378146),
                ],
                Cloud,
                0.706,
            ),
        ],
        default: Cloud,
    },
    // member 4
    DecisionList {
        rules: &[
            rule(&[gt(Ndsi, 0.888811)], CloudFree, 0.999),
            rule(&[le(B5, 4153.0), gt(B4Var, 1090000.0), le(B7Var, 325542.0)], CloudFree, 0.994),
            rule(
                &[
                    le(B5, 4153.0), gt(Ndvi, -0.00044238), gt(B2Var, 89280.1), le(B2Var, 1.15e+07),
                    gt(NdsiVar, 0.0355158),
                ],
                CloudFree,
                0.990,
            ),
            rule(
                &[
                    le(B1, 2874.0), gt(B3, 2844.0), le(B5, 4153.0), le(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.988,
            ),
            rule(
                &[
                    le(B5, 4153.0), gt(Ndvi, -0.00044238), le(B2Var, 89280.1), gt(B7Var, 325542.0),
                ],
                CloudFree,
                0.987,
            ),
            rule(&[le(B1, 2499.0), gt(B3, 2484.0)], CloudFree, 0.980),
            rule(
                &[
                    le(B1, 2874.0), le(B1Var, 103107.0), gt(NdviVar, 0.00504752),
                ],
                CloudFree,
                0.973,
            ),
            rule(&[le(B5, 4153.0), le(B5Var, 1.05e+07), gt(NdsiVar, 0.0780484)], CloudFree, 0.966),
            rule(
                &[
                    le(B5, 4153.0), gt(B1Var, 5.47e+07), le(B2Var, 1.15e+07), gt(B7Var, 325542.0),
                    gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.965,
            ),
            rule(
                &[
                    le(B1, 1367.0), le(B7Var, 325542.0), gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.950,
            ),
            rule(&[le(B5, 1480.0), le(B5Var, 15695.8), gt(NdsiVar, 0.00144666)], CloudFree, 0.948),
            rule(
                &[
                    gt(B2, 1673.0), le(B5, 1480.0), le(B7Var, 325542.0), gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.941,
            ),
            rule(
                &[
                    gt(B5, 1480.0), le(B5, 4153.0), gt(B1Var, 3400000.0), le(B2Var, 274632.0),
                    gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.936,
            ),
            rule(
                &[
                    gt(B1, 1367.0), le(B2, 1673.0), le(Ndvi, 0.00974093), gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.928,
            ),
            rule(&[le(B1, 2499.0), le(Ndvi, -0.0123566), le(B1Var, 103107.0)], CloudFree, 0.925),
            rule(
                &[
                    le(B1, 2040.0), gt(B5, 1480.0), le(Ndvi, 0.223642), le(B7Var, 325542.0),
                    gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.921,
            ),
            rule(
                &[
                    le(B5, 4153.0), le(B5Var, 1.05e+07), le(B7Var, 325542.0),
                    gt(NdsiVar, 0.0177706),
                ],
                CloudFree,
                0.917,
            ),
            rule(&[le(B1, 2499.0), gt(B7, 2458.0), le(B1Var, 103107.0)], CloudFree, 0.858),
            rule(
                &[
                    le(B1, 3255.0), gt(B2, 1763.0), le(B5, 4153.0), le(Ndvi, 0.223642),
                    le(B5Var, 1.05e+07), le(B7Var, 325542.0), gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.846,
            ),
            rule(
                &[
                    le(B1, 2884.0), gt(Ndvi, -0.00044238), le(Ndvi, 0.0894992), gt(B2Var, 89280.1),
                    le(B5Var, 1.05e+07), gt(NdsiVar, 0.00144666),
                ],
                CloudFree,
                0.840,
            ),
            rule(&[gt(Ndvi, 0.392625)], CloudFree, 0.823),
            rule(
                &[
                    le(B1, 2499.0), gt(Ndvi, 0.0394758), le(Ndvi, 0.107908), le(B1Var, 11846.8),
                    gt(B4Var, 5354.76),
                ],
                CloudFree,
                0.695,
            ),
            rule(&[le(Ndsi, -0.201802), le(B2Var, 16676.0)], CloudFree, 0.679),
            rule(&[le(B1, 3446.0), gt(B5, 4153.0)], CloudFree, 0.584),
            rule(
                &[
                    gt(B1, 2884.0), le(B5, 4153.0), le(B1Var, 5.47e+07), gt(B2Var, 89280.1),
                    le(B5Var, 1.05e+07), gt(B7Var, 325542.0), le(NdsiVar, 0.0355158),
                ],
                Cloud,
                0.998,
            ),
            rule(
                &[
                    le(B1, 2499.0), le(B3, 2484.0), gt(B1Var, 103107.0), le(NdsiVar, 0.00144666),
                ],
                Cloud,
                0.998,
            ),
            rule(&[gt(B1, 3446.0), gt(B5, 4153.0)], Cloud, 0.998),
            rule(
                &[
                    gt(B1, 2040.0), le(B2, 1763.0), gt(B5, 1480.0), le(B2Var, 274632.0),
                ],
                Cloud,
                0.988,
            ),
            rule(
                &[
                    le(B3, 2844.0), le(B7, 2458.0), le(Ndvi, 0.0394758), le(B1Var, 11846.8),
                    gt(B4Var, 5354.76), le(NdsiVar, 0.00144666),
                ],
                Cloud,
                0.959,
            ),
            rule(
                &[
                    gt(B2Var, 1.15e+07), gt(B7Var, 325542.0), le(NdsiVar, 0.0780484),
                ],
                Cloud,
                0.955,
            ),
            rule(
                &[
                    le(B7, 2458.0), le(Ndvi, 0.392625), le(Ndsi, -0.201802), gt(B2Var, 16676.0),
                    le(NdviVar, 0.00504752), le(NdsiVar, 0.00144666),
                ],
                Cloud,
                0.947,
            ),
            rule(&[gt(B5Var, 1.05e+07)], Cloud, 0.940),
            rule(
                &[
                    le(Ndvi, -0.00044238), le(B1Var, 5.47e+07), le(B2Var, 1.15e+07),
                    gt(B7Var, 325542.0), le(NdsiVar, 0.0780484),
                ],
                Cloud,
                0.927,
            ),
            rule(
                &[
                    gt(Ndvi, 0.0894992), gt(B2Var, 89280.1), gt(B7Var, 325542.0),
                    le(NdsiVar, 0.0355158),
                ],
                Cloud,
                0.900,
            ),
            rule(
                &[
                    gt(Ndvi, 0.107908), le(Ndvi, 0.392625), gt(Ndsi, -0.201802),
                    le(NdviVar, 0.00504752), le(NdsiVar, 0.00144666),
                ],
                Cloud,
                0.894,
            ),
            rule(
                &[
                    gt(B1, 1367.0), le(B2, 1673.0), le(B5, 1480.0), gt(Ndvi, 0.00974093),
                    le(B4Var, 1090000.0), gt(B5Var, 15695.8), le(NdsiVar, 0.0177706),
                ],
                Cloud,
                0.820,
            ),
            rule(
                &[
                    gt(B1, 1367.0), gt(B5, 1480.0), gt(B2Var, 274632.0), le(NdsiVar, 0.0177706),
                ],
                Cloud,
                0.817,
            ),
            rule(&[gt(B1, 1367.0), le(B4Var, 1090000.0), le(NdsiVar, 0.0177706)], Cloud, 0.641),
        ],
        default: CloudFree,
    },
    // member 5
    DecisionList {
        rules: &[
            rule(
                &[
                    le(B2, 4222.0), le(B7, 1298.0), gt(Ndsi, 0.438529), le(NdsiVar, 0.0284024),
                ],
                CloudFree,
                0.999,
            ),
            rule(&[gt(Ndsi, 0.888811)], CloudFree, 0.999),
            rule(&[gt(NdsiVar, 0.136021)], CloudFree, 0.999),
            rule(&[le(B1, 2756.0), gt(B3, 2842.0), le(NdsiVar, 0.000488092)], CloudFree, 0.996),
            rule(&[le(B1, 2162.0), gt(B3, 2095.0), gt(NdsiVar, 0.000488092)], CloudFree, 0.991),
            rule(
                &[
                    le(B2, 4222.0), le(B7, 1298.0), le(Ndvi, 0.110778), le(B2Var, 3129.56),
                ],
                CloudFree,
                0.973,
            ),
            rule(&[le(B1, 1187.0)], CloudFree, 0.972),
            rule(
                &[
                    le(B1, 2162.0), gt(B5, 1649.0), le(Ndvi, 0.0932514), le(B1Var, 170233.0),
                    gt(B4Var, 5354.76), gt(NdsiVar, 0.000488092), le(NdsiVar, 0.00313462),
                ],
                CloudFree,
                0.958,
            ),
            rule(&[le(B1, 3362.0), gt(B2, 3250.0)], CloudFree, 0.951),
            rule(
                &[
                    le(B1, 2162.0), gt(B5, 1819.0), le(B1Var, 170233.0), gt(NdviVar, 0.00355646),
                    gt(NdsiVar, 0.000488092),
                ],
                CloudFree,
                0.942,
            ),
            rule(&[le(B1, 2162.0), gt(B5, 1649.0), gt(NdsiVar, 0.00313462)], CloudFree, 0.903),
            rule(&[le(Ndvi, 0.0564516), le(Ndsi, -0.115053)], CloudFree, 0.891),
            rule(
                &[
                    le(B1, 2162.0), gt(B5, 1819.0), le(Ndvi, 0.236486), gt(B4Var, 5354.76),
                    le(B7Var, 121237.0), gt(NdsiVar, 0.000488092),
                ],
                CloudFree,
                0.883,
            ),
            rule(&[gt(B5, 1770.0), le(B7, 1298.0)], CloudFree, 0.881),
            rule(
                &[
                    gt(B1, 2162.0), le(B7, 1505.0), gt(Ndvi, 0.0749564), gt(B4Var, 5354.76),
                    gt(NdsiVar, 0.000488092),
                ],
                CloudFree,
                0.871,
            ),
            rule(&[gt(B1, 3362.0), le(B5, 2173.0), gt(NdsiVar, 0.000488092)], CloudFree, 0.817),
            rule(
                &[
                    gt(Ndvi, 0.307271), le(Ndsi, -0.115053), le(NdsiVar, 0.000488092),
                ],
                CloudFree,
                0.744,
            ),
            rule(&[le(B1, 3362.0), gt(NdsiVar, 0.000488092)], CloudFree, 0.626),
            rule(&[gt(B1, 2756.0), gt(Ndvi, 0.0564516), le(NdsiVar, 0.000488092)], Cloud, 0.999),
            rule(&[le(B5, 1770.0), gt(Ndvi, 0.110778), le(NdsiVar, 0.000350481)], Cloud, 0.996),
            rule(
                &[
                    le(B3, 2095.0), gt(B7, 1298.0), gt(B1Var, 170233.0), le(NdsiVar, 0.00313462),
                ],
                Cloud,
                0.995,
            ),
            rule(
                &[
                    gt(B1, 2162.0), le(B3, 2003.0), gt(B7, 1505.0), gt(Ndvi, 0.0749564),
                    le(NdsiVar, 0.136021),
                ],
                Cloud,
                0.988,
            ),
            rule(&[gt(B1, 3362.0), gt(B5, 2173.0), le(NdsiVar, 0.136021)], Cloud, 0.969),
            rule(
                &[
                    gt(B1, 2162.0), le(B2, 1898.0), gt(B7, 1298.0), le(Ndvi, 0.0749564),
                ],
                Cloud,
                0.968,
            ),
            rule(
                &[
                    gt(B2, 4222.0), le(Ndsi, 0.888811), le(NdviVar, 0.00194084),
                    le(NdsiVar, 0.0284024),
                ],
                Cloud,
                0.949,
            ),
            rule(
                &[
                    le(B1, 3362.0), le(B5, 1649.0), gt(B7, 1298.0), le(NdsiVar, 0.136021),
                ],
                Cloud,
                0.916,
            ),
            rule(
                &[
                    gt(B1, 2376.0), gt(B7, 1505.0), gt(Ndvi, 0.0749564), gt(B4Var, 5354.76),
                    le(NdsiVar, 0.136021),
                ],
                Cloud,
                0.905,
            ),
            rule(
                &[
                    gt(B1, 1187.0), le(B7, 1298.0), le(Ndsi, 0.438529), gt(B2Var, 356345.0),
                    le(NdviVar, 0.00194084), le(NdsiVar, 0.0284024),
                ],
                Cloud,
                0.898,
            ),
            rule(&[gt(B7, 1298.0), le(Ndvi, 0.307271), le(NdsiVar, 0.000488092)], Cloud, 0.897),
            rule(
                &[
                    gt(B1, 1187.0), le(B2, 4222.0), le(B5, 1770.0), gt(B7, 1192.0),
                    le(Ndsi, 0.438529), le(B2Var, 356345.0), le(NdviVar, 0.00194084),
                    le(NdsiVar, 0.0284024),
                ],
                Cloud,
                0.840,
            ),
            rule(
                &[
                    gt(B1, 2629.0), le(B2, 3250.0), gt(B5, 1649.0), gt(B7, 1298.0), le(B7, 2681.0),
                    le(NdsiVar, 0.136021),
                ],
                Cloud,
                0.815,
            ),
            rule(
                &[
                    gt(B1, 1187.0), le(B3, 1873.0), le(B5, 1770.0), gt(Ndvi, 0.110778),
                    le(NdviVar, 0.00194084), le(NdsiVar, 0.0284024),
                ],
                Cloud,
                0.807,
            ),
            rule(&[gt(B7, 1298.0), gt(Ndvi, 0.0932514), le(NdsiVar, 0.00313462)], Cloud, 0.786),
            rule(
                &[
                    gt(B1, 1187.0), le(B2, 1276.0), le(B5, 1770.0), le(B7, 1192.0),
                    le(Ndsi, 0.438529), le(B2Var, 356345.0), le(NdviVar, 0.00194084),
                    le(NdsiVar, 0.0284024),
                ],
                Cloud,
                0.778,
            ),
        ],
        default: CloudFree,
    },
];

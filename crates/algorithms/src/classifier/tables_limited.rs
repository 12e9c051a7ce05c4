//! Variance-free ensemble members.
//!
//! Five decision lists over reflectance bands and indices only, for
//! pixels where local variance is undefined (scene borders, scan gaps).
//! Same reference-data rules as the variance-aware set: do not edit by
//! hand without retraining.

use skymask_core::mask::CloudClass::{Cloud, CloudFree};

use super::rules::Feature::{
    B1, B2, B3, B4, B5, B7, Ndsi, Ndvi,
};
use super::rules::{gt, le, rule, DecisionList};

pub static LIMITED_MEMBERS: [DecisionList; 5] = [
    // member 1
    DecisionList {
        rules: &[
            rule(&[gt(B3, 1424.0), le(B7, 1187.0)], CloudFree, 0.978),
            rule(&[le(B1, 2999.0), le(Ndvi, 0.158153), le(Ndsi, -0.212327)], CloudFree, 0.977),
            rule(&[le(B1, 2079.0), gt(B3, 2080.0)], CloudFree, 0.976),
            rule(&[gt(B1, 6251.0), le(B4, 5012.0), le(B7, 2077.0)], CloudFree, 0.972),
            rule(&[le(B1, 2483.0), gt(B3, 2408.0), gt(Ndsi, -0.212327)], CloudFree, 0.971),
            rule(&[le(B1, 2999.0), gt(B2, 2771.0), le(Ndvi, 0.0912175)], CloudFree, 0.959),
            rule(&[gt(B4, 4172.0), le(B7, 1464.0)], CloudFree, 0.958),
            rule(
                &[
                    le(B1, 3532.0), gt(B3, 1727.0), gt(B4, 1928.0), le(B7, 1464.0),
                ],
                CloudFree,
                0.952,
            ),
            rule(
                &[
                    le(B1, 2999.0), gt(B2, 1970.0), le(B5, 1937.0), le(B7, 1619.0),
                    le(Ndvi, 0.0912175),
                ],
                CloudFree,
                0.951,
            ),
            rule(
                &[
                    gt(B1, 2999.0), le(B1, 3589.0), gt(B4, 3588.0), le(B7, 2077.0),
                ],
                CloudFree,
                0.947,
            ),
            rule(&[le(B1, 2999.0), gt(B4, 3173.0), gt(Ndsi, -0.0444104)], CloudFree, 0.944),
            rule(&[le(B1, 1600.0), le(B4, 1928.0)], CloudFree, 0.944),
            rule(&[le(B4, 2729.0), le(Ndsi, -0.212327)], CloudFree, 0.922),
            rule(&[le(B1, 2638.0), gt(B5, 1937.0), le(Ndvi, 0.0912175)], CloudFree, 0.920),
            rule(&[le(B7, 1799.0), le(Ndsi, -0.212327)], CloudFree, 0.910),
            rule(
                &[
                    le(B1, 1993.0), gt(B5, 1937.0), gt(B7, 1464.0), le(Ndvi, 0.210062),
                ],
                CloudFree,
                0.895,
            ),
            rule(&[le(B1, 2999.0)], CloudFree, 0.690),
            rule(&[gt(B1, 2483.0), gt(Ndvi, 0.0912175), le(Ndsi, -0.0444104)], Cloud, 0.989),
            rule(&[gt(B7, 1266.0), gt(Ndsi, 0.491986)], Cloud, 0.987),
            rule(&[gt(B7, 1464.0), gt(Ndvi, 0.210062), gt(Ndsi, -0.212327)], Cloud, 0.886),
            rule(
                &[
                    gt(B1, 1600.0), le(B3, 1299.0), le(B4, 1928.0), gt(B7, 919.0), le(B7, 1464.0),
                ],
                Cloud,
                0.851,
            ),
            rule(
                &[
                    gt(B1, 1451.0), le(B3, 1139.0), le(B7, 919.0), gt(Ndvi, 0.0602801),
                    le(Ndvi, 0.421493), le(Ndsi, 0.169811),
                ],
                Cloud,
                0.815,
            ),
            rule(&[gt(B1, 1802.0), gt(B7, 919.0)], Cloud, 0.758),
        ],
        default: Cloud,
    },
    // member 2
    DecisionList {
        rules: &[
            rule(&[gt(B4, 6829.0), le(B5, 3315.0)], CloudFree, 0.994),
            rule(&[gt(Ndvi, 0.44504)], CloudFree, 0.992),
            rule(
                &[
                    le(B1, 3544.0), gt(B4, 4212.0), gt(B5, 1136.0), le(B5, 3315.0),
                ],
                CloudFree,
                0.989,
            ),
            rule(&[gt(B3, 1258.0), le(B5, 1136.0)], CloudFree, 0.979),
            rule(
                &[
                    le(B1, 3544.0), gt(B5, 1136.0), le(B7, 1067.0), gt(Ndsi, 0.143936),
                ],
                CloudFree,
                0.953,
            ),
            rule(&[gt(B1, 6251.0), le(B7, 1683.0)], CloudFree, 0.948),
            rule(
                &[
                    gt(B1, 1555.0), le(B1, 2321.0), le(B4, 3520.0), gt(B5, 2467.0), le(B7, 1726.0),
                ],
                CloudFree,
                0.904,
            ),
            rule(&[le(B1, 3544.0), gt(B2, 3236.0), le(B5, 3315.0)], CloudFree, 0.901),
            rule(
                &[
                    le(B1, 2835.0), gt(B3, 2538.0), gt(Ndsi, -0.106196), le(Ndsi, 0.143936),
                ],
                CloudFree,
                0.885,
            ),
            rule(&[le(B4, 4001.0), gt(B5, 3315.0), le(Ndvi, 0.0617448)], CloudFree, 0.883),
            rule(&[le(B1, 2082.0), gt(B3, 1839.0), le(B4, 3520.0)], CloudFree, 0.815),
            rule(&[le(B4, 4001.0)], CloudFree, 0.584),
            rule(&[gt(B4, 4001.0), gt(B5, 3315.0)], Cloud, 0.989),
            rule(&[gt(B1, 2043.0), le(B2, 1763.0), le(Ndsi, 0.143936)], Cloud, 0.973),
            rule(&[gt(B1, 3544.0), gt(B7, 1683.0)], Cloud, 0.972),
            rule(&[gt(B1, 2599.0), gt(B5, 3315.0), gt(Ndvi, 0.0617448)], Cloud, 0.968),
            rule(&[gt(B1, 2835.0), le(Ndsi, 0.143936)], Cloud, 0.919),
            rule(&[gt(B1, 3264.0), le(B2, 3334.0), gt(B7, 1067.0)], Cloud, 0.917),
            rule(&[gt(B1, 2151.0), le(B2, 1898.0), gt(B5, 1537.0)], Cloud, 0.904),
            rule(
                &[
                    gt(B1, 2082.0), le(B3, 1994.0), gt(Ndvi, 0.179141), le(Ndsi, 0.143936),
                ],
                Cloud,
                0.888,
            ),
            rule(&[gt(B1, 3544.0), le(B1, 6251.0), le(B4, 6829.0), gt(B5, 1136.0)], Cloud, 0.881),
            rule(
                &[
                    le(B2, 2204.0), gt(B4, 3520.0), le(B5, 3315.0), le(Ndvi, 0.44504),
                    le(Ndsi, 0.143936),
                ],
                Cloud,
                0.815,
            ),
            rule(
                &[
                    gt(B1, 1800.0), le(B1, 2082.0), le(B3, 1839.0), le(B5, 3315.0), gt(B7, 1342.0),
                    gt(Ndvi, 0.179141), le(Ndvi, 0.207702),
                ],
                Cloud,
                0.727,
            ),
            rule(
                &[
                    gt(B1, 2321.0), le(B2, 3236.0), le(B4, 4212.0), le(B5, 3315.0),
                    le(Ndsi, 0.143936),
                ],
                Cloud,
                0.709,
            ),
            rule(
                &[
                    gt(B1, 1555.0), le(B1, 1800.0), le(B3, 1839.0), gt(B5, 1537.0),
                    gt(Ndvi, 0.179141), le(Ndvi, 0.44504), le(Ndsi, -0.0472716),
                ],
                Cloud,
                0.681,
            ),
            rule(
                &[
                    gt(B1, 1182.0), gt(B5, 1136.0), le(B5, 1537.0), gt(B7, 542.0),
                    le(Ndvi, 0.44504), le(Ndsi, 0.143936),
                ],
                Cloud,
                0.661,
            ),
            rule(
                &[
                    le(B3, 1258.0), le(B5, 1136.0), gt(B7, 542.0), le(Ndvi, 0.44504),
                ],
                Cloud,
                0.591,
            ),
        ],
        default: CloudFree,
    },
    // member 3
    DecisionList {
        rules: &[
            rule(
                &[
                    le(B1, 2497.0), gt(B3, 2156.0), le(B3, 2276.0), le(B7, 1626.0),
                    gt(Ndvi, 0.0650248),
                ],
                CloudFree,
                0.997,
            ),
            rule(&[gt(Ndsi, 0.881556)], CloudFree, 0.997),
            rule(&[gt(B2, 3653.0), le(B7, 1626.0), gt(Ndvi, 0.0650248)], CloudFree, 0.974),
            rule(
                &[
                    le(B1, 2497.0), gt(B3, 1979.0), le(B7, 1626.0), le(Ndsi, 0.0546875),
                ],
                CloudFree,
                0.973,
            ),
            rule(&[gt(B2, 1011.0), le(B7, 486.0)], CloudFree, 0.973),
            rule(
                &[
                    le(B1, 1966.0), gt(B5, 1707.0), le(B7, 1626.0), gt(Ndvi, 0.0650248),
                    le(Ndvi, 0.12763),
                ],
                CloudFree,
                0.965,
            ),
            rule(
                &[
                    gt(B5, 2507.0), le(B7, 1626.0), gt(Ndvi, 0.0650248), gt(Ndsi, -0.254112),
                ],
                CloudFree,
                0.954,
            ),
            rule(&[le(B2, 1011.0)], CloudFree, 0.950),
            rule(&[gt(B3, 1265.0), le(B7, 1008.0)], CloudFree, 0.943),
            rule(&[le(B3, 1265.0), gt(Ndvi, 0.403095)], CloudFree, 0.934),
            rule(&[le(B1, 1725.0), le(B7, 1286.0), le(Ndvi, 0.139127)], CloudFree, 0.927),
            rule(
                &[
                    le(B1, 1725.0), gt(B3, 1205.0), le(B4, 2458.0), le(B7, 1286.0),
                ],
                CloudFree,
                0.915,
            ),
            rule(
                &[
                    gt(B1, 1842.0), le(B2, 4235.0), gt(B4, 1742.0), le(B7, 1286.0),
                    le(Ndvi, 0.0979757),
                ],
                CloudFree,
                0.911,
            ),
            rule(
                &[
                    le(B2, 4235.0), gt(B3, 1265.0), gt(B5, 1747.0), le(B7, 1286.0),
                ],
                CloudFree,
                0.904,
            ),
            rule(&[gt(B4, 6150.0), le(B5, 3315.0), le(Ndsi, 0.49737)], CloudFree, 0.898),
            rule(&[le(B5, 3315.0), gt(Ndsi, 0.368125), le(Ndsi, 0.49737)], CloudFree, 0.882),
            rule(
                &[
                    le(B1, 3284.0), gt(B3, 2276.0), gt(B5, 1707.0), le(B7, 1626.0),
                    gt(Ndvi, 0.0650248),
                ],
                CloudFree,
                0.867,
            ),
            rule(&[le(B4, 3074.0), gt(B5, 3315.0)], CloudFree, 0.848),
            rule(&[le(B1, 3418.0), gt(B5, 3315.0), le(Ndvi, 0.079329)], CloudFree, 0.841),
            rule(&[le(B3, 1205.0), le(B7, 1286.0), le(Ndsi, -0.0934991)], CloudFree, 0.838),
            rule(
                &[
                    gt(B5, 2885.0), le(B7, 2112.0), gt(Ndvi, 0.0650248), gt(Ndsi, -0.254112),
                ],
                CloudFree,
                0.809,
            ),
            rule(
                &[
                    le(B1, 1966.0), gt(B3, 1220.0), le(B4, 2470.0), le(B7, 1458.0),
                ],
                CloudFree,
                0.802,
            ),
            rule(
                &[
                    le(B1, 1966.0), gt(B4, 2470.0), le(B4, 3217.0), gt(B7, 1286.0), le(B7, 1626.0),
                ],
                CloudFree,
                0.797,
            ),
            rule(
                &[
                    gt(B5, 2528.0), le(B7, 1805.0), gt(Ndvi, 0.0650248), gt(Ndsi, -0.254112),
                ],
                CloudFree,
                0.783,
            ),
            rule(&[le(B1, 3376.0), le(Ndvi, 0.0650248)], CloudFree, 0.773),
            rule(&[le(B4, 2856.0), le(Ndsi, -0.254112)], CloudFree, 0.761),
            rule(&[gt(B1, 1725.0), le(B3, 1265.0), gt(B7, 486.0)], Cloud, 0.864),
            rule(
                &[
                    le(B1, 1725.0), gt(B2, 1011.0), le(B3, 1265.0), gt(B4, 2458.0), gt(B7, 486.0),
                    le(B7, 1286.0), le(Ndvi, 0.403095),
                ],
                Cloud,
                0.827,
            ),
            rule(
                &[
                    gt(B2, 1011.0), le(B5, 1707.0), gt(B7, 1286.0), le(Ndsi, 0.368125),
                ],
                Cloud,
                0.779,
            ),
            rule(&[gt(B1, 1842.0), le(B4, 1742.0), le(B5, 1747.0), gt(B7, 1008.0)], Cloud, 0.734),
            rule(&[le(Ndsi, 0.881556)], Cloud, 0.528),
        ],
        default: Cloud,
    },
    // member 4
    DecisionList {
        rules: &[
            rule(&[le(B1, 2118.0), gt(B2, 2012.0)], CloudFree, 0.976),
            rule(&[le(B1, 3234.0), gt(B2, 3108.0), gt(B5, 3315.0)], CloudFree, 0.973),
            rule(&[le(B1, 2467.0), gt(B3, 2364.0)], CloudFree, 0.944),
            rule(&[le(B1, 2654.0), gt(B5, 3315.0), le(Ndvi, 0.1719)], CloudFree, 0.933),
            rule(
                &[
                    le(B1, 2467.0), gt(B2, 1983.0), gt(B5, 1706.0), le(Ndvi, 0.114312),
                ],
                CloudFree,
                0.921,
            ),
            rule(&[le(B1, 2762.0), gt(B3, 2437.0), gt(Ndsi, -0.115228)], CloudFree, 0.917),
            rule(
                &[
                    gt(B3, 1665.0), le(B7, 1347.0), gt(Ndvi, -0.0240739), le(Ndvi, 0.131339),
                ],
                CloudFree,
                0.897,
            ),
            rule(&[gt(B1, 6251.0), le(B5, 3112.0), le(B7, 2077.0)], CloudFree, 0.890),
            rule(&[le(B1, 3160.0), gt(B3, 2834.0), le(B5, 3112.0)], CloudFree, 0.874),
            rule(&[gt(B4, 5404.0), le(B5, 3112.0), le(B7, 2077.0)], CloudFree, 0.859),
            rule(
                &[
                    le(B1, 2467.0), gt(B5, 1706.0), gt(B7, 1347.0), gt(Ndvi, 0.114312),
                    gt(Ndsi, -0.0444104),
                ],
                CloudFree,
                0.856,
            ),
            rule(
                &[
                    le(B1, 2118.0), le(B4, 3249.0), gt(B5, 2406.0), le(B7, 1726.0),
                ],
                CloudFree,
                0.838,
            ),
            rule(&[le(B1, 2118.0), le(B4, 2223.0), gt(B5, 1706.0)], CloudFree, 0.821),
            rule(
                &[
                    le(B1, 1873.0), gt(B5, 1138.0), le(B7, 1347.0), le(Ndvi, 0.317016),
                ],
                CloudFree,
                0.813,
            ),
            rule(&[le(B1, 3544.0), gt(B2, 3043.0), le(B5, 3112.0)], CloudFree, 0.778),
            rule(&[le(B1, 2654.0), gt(B5, 3315.0)], CloudFree, 0.753),
            rule(
                &[
                    le(B1, 1684.0), gt(B2, 1342.0), le(B5, 2406.0), gt(B7, 1347.0),
                ],
                CloudFree,
                0.747,
            ),
            rule(&[le(B5, 3315.0)], CloudFree, 0.625),
            rule(&[gt(B1, 3544.0), gt(B7, 2077.0)], Cloud, 1.000),
            rule(&[gt(B1, 2467.0), le(B5, 3315.0), le(Ndsi, -0.115228)], Cloud, 0.985),
            rule(&[gt(B1, 3160.0), le(B2, 3043.0), gt(B7, 1347.0)], Cloud, 0.957),
            rule(&[gt(B1, 2654.0), gt(B5, 3315.0)], Cloud, 0.952),
            rule(&[gt(B1, 3544.0), gt(B7, 1347.0), gt(Ndvi, -0.626148)], Cloud, 0.927),
            rule(
                &[
                    gt(B5, 1157.0), gt(Ndvi, -0.564211), le(Ndvi, -0.0240739), le(Ndsi, 0.881468),
                ],
                Cloud,
                0.923,
            ),
            rule(&[gt(B1, 2762.0), le(B3, 2834.0), gt(B7, 1347.0)], Cloud, 0.905),
            rule(
                &[
                    gt(B1, 1526.0), le(B2, 1342.0), le(B5, 3315.0), gt(B7, 1347.0),
                    gt(Ndvi, 0.114312),
                ],
                Cloud,
                0.881,
            ),
            rule(&[gt(B1, 2467.0), le(B3, 2437.0), gt(B7, 1347.0)], Cloud, 0.856),
            rule(&[gt(B5, 1136.0), le(B5, 1138.0)], Cloud, 0.778),
            rule(&[gt(B1, 2123.0), le(B2, 1983.0), gt(B7, 1347.0)], Cloud, 0.774),
            rule(
                &[
                    gt(B1, 2118.0), gt(B7, 1347.0), gt(Ndvi, 0.114312), le(Ndsi, -0.0444104),
                ],
                Cloud,
                0.766,
            ),
            rule(
                &[
                    gt(B1, 1526.0), le(B2, 2012.0), gt(B4, 3249.0), le(B5, 3315.0), gt(B7, 1347.0),
                    le(Ndvi, 0.44504),
                ],
                Cloud,
                0.762,
            ),
            rule(
                &[
                    gt(B1, 1526.0), le(B1, 2467.0), le(B3, 2364.0), le(B5, 1706.0), gt(B7, 1347.0),
                ],
                Cloud,
                0.760,
            ),
            rule(
                &[
                    gt(B1, 1873.0), le(B3, 1665.0), gt(B5, 1157.0), gt(Ndvi, -0.0240739),
                    le(Ndvi, 0.317016), gt(Ndsi, -0.184974),
                ],
                Cloud,
                0.742,
            ),
            rule(
                &[
                    gt(B1, 1684.0), gt(B4, 2223.0), le(B5, 2406.0), gt(B7, 1347.0),
                    gt(Ndvi, 0.114312), le(Ndvi, 0.44504), le(Ndsi, -0.0800831),
                ],
                Cloud,
                0.697,
            ),
            rule(
                &[
                    gt(B1, 1526.0), le(B3, 2364.0), le(B5, 2626.0), gt(B7, 1726.0),
                    gt(Ndvi, 0.114312),
                ],
                Cloud,
                0.695,
            ),
            rule(
                &[
                    gt(B7, 1086.0), gt(Ndvi, 0.131339), gt(Ndsi, 0.0375777), le(Ndsi, 0.416984),
                ],
                Cloud,
                0.626,
            ),
            rule(
                &[
                    gt(B1, 1526.0), le(B3, 2364.0), le(B5, 2406.0), gt(B7, 1347.0),
                    gt(Ndvi, 0.114312), le(Ndvi, 0.44504),
                ],
                Cloud,
                0.616,
            ),
        ],
        default: CloudFree,
    },
    // member 5
    DecisionList {
        rules: &[
            rule(&[le(B7, 1461.0), le(Ndsi, -0.224928)], CloudFree, 0.998),
            rule(&[le(B1, 2601.0), gt(B3, 2260.0), le(B7, 1623.0)], CloudFree, 0.998),
            rule(&[le(B1, 1511.0), gt(B2, 1317.0), gt(B5, 1516.0)], CloudFree, 0.996),
            rule(&[gt(Ndsi, 0.85271)], CloudFree, 0.996),
            rule(&[le(B1, 2601.0), le(Ndvi, 0.107894), le(Ndsi, -0.177533)], CloudFree, 0.992),
            rule(&[le(B1, 1645.0), le(Ndvi, 0.107894)], CloudFree, 0.989),
            rule(&[le(B2, 1027.0), gt(B5, 796.0)], CloudFree, 0.987),
            rule(&[le(B5, 796.0)], CloudFree, 0.984),
            rule(&[le(B1, 2601.0), gt(B3, 2569.0)], CloudFree, 0.980),
            rule(&[le(B1, 1802.0), gt(B2, 1292.0), le(Ndvi, 0.107894)], CloudFree, 0.979),
            rule(
                &[
                    gt(B2, 1387.0), le(B3, 1461.0), le(Ndvi, 0.412224), le(Ndsi, -0.22841),
                ],
                CloudFree,
                0.979,
            ),
            rule(&[le(B1, 2005.0), gt(B3, 1949.0)], CloudFree, 0.976),
            rule(&[gt(Ndvi, 0.412224)], CloudFree, 0.971),
            rule(&[le(B7, 579.0)], CloudFree, 0.970),
            rule(&[le(B1, 3037.0), gt(B2, 2885.0), le(B5, 4374.0)], CloudFree, 0.964),
            rule(&[le(B2, 1317.0), gt(B5, 1516.0), gt(Ndvi, 0.107894)], CloudFree, 0.960),
            rule(&[gt(B1, 2601.0), le(B1, 3037.0), gt(Ndsi, 0.143982)], CloudFree, 0.955),
            rule(&[le(B1, 3037.0), gt(B3, 2909.0)], CloudFree, 0.931),
            rule(&[gt(B4, 7015.0), le(B5, 4374.0)], CloudFree, 0.929),
            rule(&[le(B4, 4251.0), gt(B5, 4374.0)], CloudFree, 0.927),
            rule(
                &[
                    le(B1, 2247.0), gt(B2, 1763.0), gt(B5, 1493.0), le(Ndvi, 0.107894),
                ],
                CloudFree,
                0.923,
            ),
            rule(&[gt(B3, 1223.0), le(B7, 1084.0), gt(Ndsi, -0.0853392)], CloudFree, 0.920),
            rule(&[le(B2, 3959.0), gt(Ndsi, 0.267478)], CloudFree, 0.902),
            rule(&[le(B5, 1516.0), le(Ndsi, -0.0853392)], CloudFree, 0.887),
            rule(&[le(B1, 2005.0), gt(B5, 1516.0), le(Ndvi, 0.175138)], CloudFree, 0.884),
            rule(&[le(B1, 2005.0), le(B4, 2856.0), le(Ndsi, -0.22841)], CloudFree, 0.828),
            rule(&[gt(B2, 3959.0), le(B5, 4374.0), gt(Ndvi, 0.0799109)], CloudFree, 0.825),
            rule(
                &[
                    le(B1, 2601.0), gt(B2, 1906.0), le(Ndvi, 0.107894), gt(Ndsi, -0.115822),
                ],
                CloudFree,
                0.822,
            ),
            rule(&[le(B1, 2394.0), gt(B5, 2533.0), le(Ndvi, 0.201976)], CloudFree, 0.786),
            rule(&[gt(B3, 1267.0), le(B7, 1461.0), le(Ndvi, 0.412224)], CloudFree, 0.780),
            rule(
                &[
                    le(B1, 2392.0), gt(B2, 1698.0), gt(B5, 1516.0), le(B7, 1623.0),
                    le(Ndvi, 0.412224),
                ],
                CloudFree,
                0.745,
            ),
            rule(&[gt(B1, 2005.0), le(B2, 1698.0), gt(B5, 1516.0)], Cloud, 0.998),
            rule(&[gt(B1, 2247.0), le(B2, 1906.0), gt(B7, 1082.0)], Cloud, 0.996),
            rule(&[gt(B1, 1645.0), le(B2, 1292.0), gt(B5, 796.0)], Cloud, 0.995),
            rule(
                &[
                    gt(B1, 2040.0), le(B2, 1763.0), gt(B7, 1082.0), le(Ndvi, 0.107894),
                ],
                Cloud,
                0.986,
            ),
            rule(
                &[
                    le(B5, 1516.0), gt(B7, 1084.0), gt(Ndvi, 0.107894), gt(Ndsi, -0.0853392),
                    le(Ndsi, 0.267478),
                ],
                Cloud,
                0.958,
            ),
            rule(
                &[
                    gt(B1, 2392.0), le(B3, 2260.0), gt(B5, 1516.0), gt(Ndvi, 0.107894),
                ],
                Cloud,
                0.953,
            ),
            rule(
                &[
                    gt(B2, 3959.0), gt(B5, 796.0), le(Ndvi, 0.0799109), le(Ndsi, 0.85271),
                ],
                Cloud,
                0.921,
            ),
            rule(
                &[
                    gt(B1, 2247.0), le(B3, 2569.0), gt(Ndsi, -0.177533), le(Ndsi, -0.115822),
                ],
                Cloud,
                0.874,
            ),
            rule(
                &[
                    gt(B1, 1511.0), gt(B2, 1317.0), le(B2, 1387.0), gt(B7, 1461.0),
                    gt(Ndvi, 0.175138),
                ],
                Cloud,
                0.841,
            ),
            rule(
                &[
                    gt(B1, 2601.0), le(B2, 2885.0), le(B3, 2909.0), le(Ndsi, 0.143982),
                ],
                Cloud,
                0.840,
            ),
            rule(
                &[
                    gt(B1, 1802.0), le(B2, 1584.0), gt(B5, 796.0), gt(Ndsi, -0.177533),
                    le(Ndsi, 0.267478),
                ],
                Cloud,
                0.833,
            ),
            rule(
                &[
                    gt(B1, 2040.0), le(B1, 2601.0), le(B3, 2569.0), le(B5, 1493.0), gt(B7, 1082.0),
                    le(Ndsi, 0.267478),
                ],
                Cloud,
                0.832,
            ),
            rule(
                &[
                    gt(B1, 1511.0), gt(B7, 1461.0), gt(Ndvi, 0.175138), gt(Ndsi, -0.22841),
                ],
                Cloud,
                0.734,
            ),
            rule(&[gt(B5, 796.0), le(Ndsi, 0.85271)], Cloud, 0.549),
        ],
        default: Cloud,
    },
];

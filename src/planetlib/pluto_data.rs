//! Pluto95 coefficients (Chapront & Francou), units of 1e-10 AU

#[rustfmt::skip]
pub(super) const AX: [f64; 4] = [
    98_083_308_510.0, -1_465_718_392.0, 11_528_487_809.0, 55_397_965_917.0,
];

#[rustfmt::skip]
pub(super) const AY: [f64; 4] = [
    101_846_243_715.0, 57_789.0, -5_487_929_294.0, 8_520_205_290.0,
];

#[rustfmt::skip]
pub(super) const AZ: [f64; 4] = [
    2_183_700_004.0, 433_209_785.0, -4_911_803_413.0, -14_029_741_184.0,
];

#[rustfmt::skip]
pub(super) const CX: [f64; 106] = [
    -16_338_582_222.0, -5_995_086_437.0, 23_663_880_362.0, 10_304_632_056.0,
    -3_996_936_944.0, -4_136_465_568.0, 1_188_702_881.0, -621_434_363.0,
    566_898_160.0, -75_880_391.0, 576_146_406.0, -659_684_298.0,
    451_962_774.0, -153_724_334.0, -603_163_280.0, 364_764_379.0,
    193_062_130.0, 161_493_959.0, 1_167_349_082.0, -1_417_467_887.0,
    15_325_240.0, -3_624_391.0, -587_306.0, 132_022.0,
    -106_501.0, 228_373.0, -95_106.0, 56_299.0,
    -48_339.0, 803_937.0, -6_172_744.0, -18_962_749.0,
    133_022.0, -25_964.0, 7111.0, -4998.0,
    32_034.0, -29_666.0, -1983.0, 114.0,
    191.0, -1063.0, 419.0, 346.0,
    5059.0, -81.0, 1408.0, 2964.0,
    -5364.0, 1509.0, -4924.0, 2954.0,
    2034.0, -5199.0, 604.0, -1247.0,
    4576.0, -350_741.0, -4023.0, 1147.0,
    -38.0, -99.0, -11_686.0, 1129.0,
    582.0, -83.0, -97.0, 431.0,
    -134.0, -323.0, -292.0, 195.0,
    39_068.0, 523.0, -1747.0, 3135.0,
    -619.0, -12_095.0, 6.0, 18_476.0,
    -130.0, -438.0, 102_345_278_799.0, -9_329_130_892.0,
    1_484_339_404.0, 472_660_593.0, -581_239_444.0, 1_016_663_241.0,
    -1_054_199_614.0, 99_039_105.0, -52_190_030.0, -3_394_173.0,
    -16_529.0, 3_102_430.0, 2286.0, -10_955.0,
    -5293.0, -654.0, 124.0, -85.0,
    29.0, 418_209_651.0, -1_191_875_710.0, -823_081.0,
    -558.0, -1091.0,
];

#[rustfmt::skip]
pub(super) const CY: [f64; 106] = [
    299_584_895_562.0, 75_951_634_908.0, -36_135_662_843.0, 18_125_610_071.0,
    -20_398_008_415.0, 6_125_780_503.0, -162_559_485.0, 4_352_425_804.0,
    -3_819_676_998.0, 1_168_107_376.0, -5_041_323_701.0, 4_093_828_501.0,
    -1_727_274_544.0, 134_214_260.0, 5_033_950_069.0, -3_071_449_401.0,
    -1_190_419_055.0, -775_881_742.0, -5_524_713_888.0, 6_803_228_005.0,
    -65_675_611.0, 15_155_413.0, 2_009_509.0, -389_682.0,
    275_571.0, 474_366.0, 132_163.0, -81_550.0,
    69_996.0, -706_470.0, 4_777_898.0, -44_002_785.0,
    -58_735.0, 7624.0, -1922.0, -729.0,
    -1733.0, -35_642.0, -586.0, -258.0,
    -368.0, 1286.0, -136.0, 883.0,
    2673.0, 331.0, 50.0, 178.0,
    2901.0, -654.0, -8972.0, 3034.0,
    1113.0, 570.0, -72.0, 1950.0,
    8550.0, 1_047_593.0, -2348.0, 313.0,
    432.0, 6765.0, -8240.0, 335.0,
    140.0, -833.0, 252.0, -210.0,
    366.0, -920.0, 1215.0, -217.0,
    -17_780.0, 581.0, -560.0, -4131.0,
    390.0, 25_613.0, -206.0, 1850.0,
    171.0, -471.0, 26_437_625_772.0, -12_674_907_683.0,
    -1_067_899_665.0, -2_082_744.0, -43_195_632.0, 211_912_497.0,
    -108_307_161.0, -63_033_809.0, -203_850_703.0, -1_672_332.0,
    7136.0, 803_655.0, -10_985.0, 9126.0,
    3317.0, -151.0, 160.0, 138.0,
    -27.0, -36_463_065_062.0, -5_816_560_445.0, 1_576_292.0,
    -21.0, -295.0,
];

#[rustfmt::skip]
pub(super) const CZ: [f64; 106] = [
    98_425_296_138.0, 25_475_793_908.0, -18_424_386_574.0, 2_645_968_636.0,
    -5_282_207_967.0, 3_278_235_471.0, -425_422_632.0, 1_526_641_086.0,
    -1_323_182_752.0, 235_873_266.0, -1_617_466_723.0, 1_557_465_867.0,
    -848_586_296.0, 218_182_986.0, 1_636_044_515.0, -1_001_334_243.0,
    -455_739_370.0, -348_173_978.0, -2_511_254_281.0, 3_062_521_470.0,
    -32_079_379.0, 7_597_939.0, 1_138_566.0, -238_849.0,
    192_377.0, 83_169.0, 148_694.0, -92_489.0,
    87_116.0, -1_281_070.0, 9_950_106.0, -25_105_642.0,
    -171_749.0, 31_035.0, -8648.0, 5360.0,
    -30_345.0, 11_482.0, 1322.0, -467.0,
    96.0, 894.0, -381.0, -583.0,
    2525.0, -569.0, 226.0, -2039.0,
    3728.0, -1540.0, 42.0, -3144.0,
    658.0, 220.0, 1848.0, 678.0,
    -7289.0, 463_291.0, 3945.0, -1141.0,
    -26.0, -10_607.0, 11_458.0, -1005.0,
    120.0, -301.0, 135.0, -186.0,
    118.0, 30.0, 197.0, -182.0,
    -8585.0, 240.0, -226.0, -2049.0,
    283.0, 11_109.0, -100.0, -842.0,
    71.0, -181.0, -22_591_501_373.0, -1_138_977_908.0,
    -782_718_600.0, -141_483_824.0, 159_033_355.0, -246_222_739.0,
    287_284_767.0, -48_002_332.0, -41_114_335.0, 578_004.0,
    -8420.0, -766_779.0, 957.0, 5780.0,
    4141.0, 417.0, -8.0, 65.0,
    -22.0, -11_656_050_047.0, -1_186_276_469.0, 1_388_681.0,
    201.0, 561.0,
];

#[rustfmt::skip]
pub(super) const SX: [f64; 106] = [
    -308_294_137_468.0, -68_820_910_480.0, 28_346_466_257.0, -1_755_658_975.0,
    7_818_660_837.0, -1_098_895_702.0, -1_192_462_299.0, -772_129_982.0,
    1_061_702_581.0, -639_572_722.0, 1_128_327_488.0, -423_570_428.0,
    -175_317_704.0, 251_601_606.0, -869_448_807.0, 551_228_298.0,
    87_807_522.0, -11_540_541.0, -103_236_703.0, 92_638_954.0,
    -3_624_991.0, 1_004_975.0, 304_396.0, -56_532.0,
    55_554.0, -799_096.0, 56_947.0, -48_016.0,
    50_599.0, -680_660.0, 5_858_452.0, 38_125_648.0,
    -109_460.0, 18_684.0, -5269.0, 2771.0,
    -6814.0, 47_130.0, 1192.0, -1387.0,
    379.0, -612.0, -52.0, 813.0,
    -4354.0, -2275.0, 685.0, -1352.0,
    4681.0, -1908.0, -6530.0, 8667.0,
    1675.0, 874.0, 898.0, 965.0,
    -7124.0, -1_145_389.0, 2931.0, -618.0,
    -34.0, -6562.0, 8038.0, -697.0,
    -8.0, 12.0, -267.0, -131.0,
    304.0, -756.0, -103.0, -250.0,
    19_816.0, -596.0, 576.0, 4122.0,
    65.0, -27_900.0, 217.0, -137.0,
    -269.0, 531.0, -24_338_350_765.0, 11_210_995_713.0,
    2_793_567_155.0, -776_019_789.0, 1_528_323_591.0, -249_354_416.0,
    1_127_608_109.0, -667_692_329.0, -1_570_766_679.0, -9_724_425.0,
    26_552.0, 3_332_520.0, -27_607.0, -11_696.0,
    -7297.0, -104.0, -184.0, -455.0,
    -16.0, 39_813_894_679.0, 3_633_087_275.0, 522_728.0,
    -320.0, -1401.0,
];

#[rustfmt::skip]
pub(super) const SY: [f64; 106] = [
    -53_545_027_809.0, -8_838_029_861.0, 23_553_788_174.0, 13_775_798_112.0,
    -6_068_121_593.0, -2_853_107_588.0, 750_355_551.0, -82_067_770.0,
    230_091_832.0, -259_838_942.0, 197_944_074.0, 27_141_006.0,
    -105_334_544.0, 95_175_918.0, -139_461_973.0, 80_593_104.0,
    -5_126_842.0, -21_953_793.0, -163_767_784.0, 192_436_228.0,
    -2_479_113.0, 561_687.0, 121_909.0, -30_275.0,
    16_333.0, 68_105.0, 24_081.0, -11_228.0,
    667.0, -73_047.0, 1_007_089.0, -22_814_549.0,
    434.0, 1013.0, 710.0, 1100.0,
    -4598.0, 1990.0, 564.0, 828.0,
    -1119.0, -1249.0, -597.0, 227.0,
    5467.0, 801.0, -2029.0, -1892.0,
    4713.0, -459.0, 1757.0, -9303.0,
    -2357.0, 7679.0, -2953.0, 629.0,
    5011.0, -333_905.0, -2388.0, 415.0,
    139.0, -5726.0, -4583.0, 310.0,
    681.0, -107.0, 301.0, -525.0,
    198.0, -379.0, -230.0, -64.0,
    36_069.0, 459.0, -1596.0, 2509.0,
    -146.0, -11_081.0, 4.0, 15_764.0,
    -147.0, -362.0, 117_449_924_600.0, -7_691_661_502.0,
    -4_771_148_239.0, 3_733_883_366.0, -7_081_845_126.0, 3_502_526_523.0,
    -8_115_570_206.0, 3_607_883_959.0, 7_690_328_772.0, 37_384_011.0,
    -164_319.0, -2_859_257.0, 1593.0, -11_997.0,
    -6476.0, 1419.0, 34.0, 232.0,
    32.0, 2_752_753_498.0, -672_124_207.0, 154_239.0,
    -400.0, 372.0,
];

#[rustfmt::skip]
pub(super) const SZ: [f64; 106] = [
    76_159_403_805.0, 17_987_340_882.0, -1_193_982_379.0, 4_828_308_190.0,
    -4_248_985_438.0, -559_147_671.0, 593_594_960.0, 208_799_497.0,
    -249_913_200.0, 115_051_024.0, -282_588_988.0, 135_883_560.0,
    23_091_693.0, -49_187_976.0, 223_956_575.0, -137_344_299.0,
    -28_188_872.0, -2_636_274.0, -14_202_661.0, 25_488_216.0,
    419_837.0, -150_966.0, -64_906.0, 3719.0,
    -2226.0, 86_321.0, -15_970.0, 16_609.0,
    -15_782.0, 200_300.0, -1_500_491.0, -9_161_491.0,
    37_481.0, -4616.0, 224.0, -1027.0,
    5220.0, -6976.0, -267.0, 556.0,
    -23.0, -711.0, -122.0, -97.0,
    2440.0, 786.0, -806.0, -167.0,
    -156.0, 572.0, 2532.0, -4582.0,
    -1178.0, 875.0, -558.0, 781.0,
    3230.0, -116_132.0, -1440.0, 438.0,
    176.0, 1072.0, -5850.0, 418.0,
    267.0, 60.0, 134.0, -85.0,
    -59.0, 112.0, -168.0, -89.0,
    14_986.0, 190.0, -685.0, 1018.0,
    -48.0, -4807.0, 0.0, 7066.0,
    -54.0, -229.0, 44_126_663_549.0, -5_626_220_823.0,
    -2_536_450_838.0, 1_536_292_657.0, -2_916_144_530.0, 949_074_586.0,
    -2_842_935_040.0, 1_500_396_857.0, 3_415_136_438.0, 19_702_076.0,
    -46_995.0, -5_801_645.0, 33_470.0, 17_674.0,
    7355.0, 199.0, 11.0, 205.0,
    33.0, -11_127_973_411.0, -1_310_869_292.0, -164_753.0,
    -107.0, 284.0,
];

/// Frequencies, radians/day
#[rustfmt::skip]
pub(super) const FQ: [f64; 106] = [
    6.45003954767e-05, 0.0001083248054773, 0.0001302772403167,
    0.000164786865996, 0.0001935009111902, 0.0002223740247147,
    0.0003032575201026, 0.0003259246239385, 0.0003564763034914,
    0.0004265811293132, 0.0004503959517513, 0.0004638675148284,
    0.0005009272733421, 0.0005163593863414, 0.000557882682821,
    0.0005882795362847, 0.0006450023602974, 0.0007097635821639,
    0.0007630643253588, 0.0007740033551209, 0.0008385031396726,
    0.000895059160972, 0.0009545118163938, 0.00102554175696,
    0.0010826728325744, 0.0011680358909203, 0.0012405125052369,
    0.0012931805883876, 0.0013460706181008, 0.0014190059530383,
    0.0014394705053002, 0.0014502634075377, 0.0014992014575181,
    0.0015434430430867, 0.0016000710611098, 0.0016562809940875,
    0.0017275924266291, 0.0017454042542465, 0.0018215079641428,
    0.0018694826929211, 0.0019274630193251, 0.0020276790928706,
    0.0021822818660433, 0.002288528985497, 0.002316764637942,
    0.0023445464874575, 0.0024069306189938, 0.0024473146628449,
    0.0024778027974419, 0.0025244208011161, 0.0025682157855485,
    0.0026028617439482, 0.0026544444009919, 0.0026987455959123,
    0.0027308225916697, 0.0027735113723168, 0.002872838546403,
    0.0029001725379479, 0.0029379670182566, 0.0029750359447782,
    0.0031326820696785, 0.0031822107498712, 0.0031931048857857,
    0.0032268922327691, 0.0034657232066225, 0.003783858164567,
    0.0038055149432355, 0.0038631344783149, 0.0039129259467328,
    0.004031144546251, 0.004060754200893, 0.0041490103414206,
    0.0043500678052272, 0.0046321937641054, 0.005800037672524,
    0.0091460971544658, 0.0091560629947357, 0.0172021239411871,
    0.0182919855069063, 0.0279624510118796, 0.034404099617764,
    0.0714245719830324, 0.0001083248054773, 0.000164786865996,
    0.0003032575201026, 0.0003259246239385, 0.0003564763034914,
    0.0005009272733421, 0.0005882795362847, 0.0007097635821639,
    0.0007630643253588, 0.000895059160972, 0.0011680358909203,
    0.0014502634075377, 0.0017454042542465, 0.0029001725379479,
    0.0031822107498712, 0.004060754200893, 0.0043500678052272,
    0.0091460971544658, 0.0279624510118796, 0.0001083248054773,
    0.0003032575201026, 0.0011680358909203, 0.0043500678052272,
    0.0279624510118796,
];

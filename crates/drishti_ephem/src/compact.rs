//! Compact Earth series generated from mean Keplerian elements of the
//! Earth-Moon barycentre, the Moon, Venus and the four giant planets.
//!
//! Rows are `[amplitude (au), phase (rad), frequency (rad/Julian year)]`,
//! referred to the J2000 ecliptic. Accuracy is a few 1e-5 au in position.

use drishti_time::TwoPartTime;

use crate::series::{SeriesSet, evaluate};
use crate::{EarthEphemeris, EarthState};

#[rustfmt::skip]
pub(crate) static SUN_EARTH_X0: [[f64; 3]; 18] = [
    [       0.999862975812354,   1.7534375570727854,        6.283075779009216],
    [     0.02506691042446507,    4.938194127638964,   5.6421894029068415e-05],
    [    0.008353886797041004,   1.7102736400964063,       12.566095136124403],
    [  0.00010469548276131573,   1.6671097231205607,        18.84911449323959],
    [   3.491149220864203e-05,   1.8397653910247076,       -6.282962935221159],
    [   3.111174391889669e-05,   0.6687481700332083,        83.99709111633996],
    [  2.5659193309649055e-06,   1.4547885936514395,       0.7101768687466629],
    [  1.5550827930708548e-06,    1.623945806125501,        25.13213385035478],
    [   8.533738257295825e-07,     3.02430040000477,       167.28400536393326],
    [  1.9446679996957053e-07,   1.8829293080334426,      -12.565982292336345],
    [   6.280204566883495e-08,    3.696129975012314,       -84.67223204488195],
    [   3.511119011579317e-08,   5.3798526299763125,       250.57091961152656],
    [   2.537649597270399e-08,   1.5807818916110927,       31.415153207469967],
    [   1.175089571094445e-08,   2.2408290172697143,       -82.57673737884663],
    [   5.179554814602595e-09,   2.9100895513940825,       -1.385317797288661],
    [  1.8279242854600208e-09,    1.926093244759313,      -18.849001649451534],
    [  1.7226170964818806e-09,   1.3405777450407523,      -167.95914629247525],
    [  1.7121349821795725e-09,   1.4522195527681312,       333.85783385911986],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_X1: [[f64; 3]; 6] = [
    [   6.573929682480995e-07,   1.7966014740497755,   5.6421894029068415e-05],
    [  2.1899311130779696e-07,    4.851866293688277,       12.566095136124403],
    [   6.353157007588095e-08,   1.7534375570751042,        6.283075779009216],
    [   5.495735489803881e-09,    4.808702376892045,        18.84911449323959],
    [  1.8332775240124997e-09,    4.981358044266128,       -6.282962935221159],
    [  1.2249492572241302e-10,    4.765538456856848,        25.13213385035478],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_X2: [[f64; 3]; 2] = [
    [  1.3723389091779837e-12,     4.89503021018263,        6.283075779009216],
    [   1.276297916458327e-12,    4.529747750106801,       -6.283075779009216],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Y0: [[f64; 3]; 18] = [
    [       0.999862975812354,   0.1826412302778888,        6.283075779009216],
    [     0.02506691042446507,    3.367397800844067,   5.6421894029068415e-05],
    [    0.008353886797041004,   0.1394773133015097,       12.566095136124403],
    [  0.00010469548276131573,  0.09631339632566416,        18.84911449323959],
    [   3.491149220864203e-05,  0.26896906422981104,       -6.282962935221159],
    [   3.111174391889669e-05,   5.3811371504178975,        83.99709111633996],
    [  2.5659193309649055e-06,    6.167177574036129,       0.7101768687466629],
    [  1.5550827930708548e-06,  0.05314947933060443,        25.13213385035478],
    [   8.533738257295825e-07,   1.4535040732098734,       167.28400536393326],
    [  1.9446679996957053e-07,  0.31213298123854605,      -12.565982292336345],
    [   6.280204566883495e-08,   2.1253336482174174,       -84.67223204488195],
    [   3.511119011579317e-08,    3.809056303181416,       250.57091961152656],
    [   2.537649597270399e-08, 0.009985564816196169,       31.415153207469967],
    [   1.175089571094445e-08,   0.6700326904748177,       -82.57673737884663],
    [   5.179554814602595e-09,    1.339293224599186,       -1.385317797288661],
    [  1.8279242854600208e-09,  0.35529691796441654,      -18.849001649451534],
    [  1.7226170964818806e-09,    6.052966725425442,      -167.95914629247525],
    [  1.7121349821795725e-09,    6.164608533152821,       333.85783385911986],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Y1: [[f64; 3]; 6] = [
    [   6.573929682480995e-07,    0.225805147254879,   5.6421894029068415e-05],
    [  2.1899311130779696e-07,     3.28106996689338,       12.566095136124403],
    [   6.353157007588095e-08,  0.18264123028020762,        6.283075779009216],
    [   5.495735489803881e-09,   3.2379060500971484,        18.84911449323959],
    [  1.8332775240124997e-09,   3.4105617174712313,       -6.282962935221159],
    [  1.2249492572241302e-10,    3.194742130061951,        25.13213385035478],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Y2: [[f64; 3]; 2] = [
    [  1.3723389091779837e-12,    3.324233883387733,        6.283075779009216],
    [   1.276297916458327e-12,   2.9589514233119045,       -6.283075779009216],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Z0: [[f64; 3]; 8] = [
    [  2.7956259853075044e-06,    3.198698077895137,        84.33466158061096],
    [  2.6717329425969296e-07,   3.3242338838676817,        6.283075779009216],
    [  2.3056729884856682e-07,    3.984738501513368,        1.047747333017662],
    [    7.66821059150548e-08,    5.554250307866699,       167.62157582820427],
    [   6.698126840406027e-09,  0.22580514725427414,   5.6421894029068415e-05],
    [  3.1550065376812326e-09,   1.6266172306586544,       250.90849007579757],
    [  2.2322413264923924e-09,   3.2810699668913026,       12.566095136124403],
    [   1.055907039020132e-09,    4.770778925131642,       -82.23916691457563],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Z1: [[f64; 3]; 4] = [
    [  2.2593123207885524e-06,   3.3242338838676817,        6.283075779009216],
    [   5.664156457155697e-08,  0.22580514725427436,   5.6421894029068415e-05],
    [  1.8876567176768396e-08,   3.2810699668913026,       12.566095136124403],
    [  2.3657114621398027e-10,    3.237906049915032,        18.84911449323959],
];

#[rustfmt::skip]
pub(crate) static SUN_EARTH_Z2: [[f64; 3]; 1] = [
    [  1.4854595804830585e-12,    3.367397800844672,   5.6421894029068415e-05],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_X0: [[f64; 3]; 48] = [
    [    0.004954570236542359,   3.7419237914556507,       0.5296631189138595],
    [    0.002717520588191787,   4.0134586907486725,      0.21336538788705522],
    [    0.001546517587482727,    2.179566651702264,      0.03812836741319127],
    [   0.0008357510511747491,    2.325443612815807,       0.0747842217160454],
    [  0.00036002101347267163,  0.25706046684707473,    3.709290314332382e-05],
    [  0.00021987475240186903,   1.6161553101630637,   -7.312443666192485e-05],
    [  0.00011979635012968691,    4.085194462474431,       1.0592891449245758],
    [   7.313217909455902e-05,   3.2691694177444894,      0.42680390021077236],
    [  5.9309414210640983e-05,   2.9837149917991104,    7.121865056514843e-05],
    [  1.9928727942731565e-05,   0.7847831489880149,    -5.62719702463221e-05],
    [   1.973670158258668e-05,    4.808764887422298,      0.14949722478152566],
    [   6.642541651183232e-06,  0.43275750082672637,      0.07631300679662886],
    [   4.344826601856699e-06,    4.428465133493196,        1.588915170935292],
    [  3.0359437929550865e-06,    4.895030210662578,        6.283075779009216],
    [  2.9521298347520925e-06,   2.5248801447403095,       0.6402424125344895],
    [  1.7666450506690805e-06,  0.03454180249957339,       10.213285495824113],
    [  1.4528063851775225e-06,    3.055382449418029,      -0.5295889331075729],
    [   1.279390954320737e-06,    6.237293702381721,     -0.21346615549767273],
    [    9.87859970263899e-07,    5.502037236757042,     -0.21351163676037907],
    [   6.991389251890532e-07,   1.0089008548491112,       0.2242102278470059],
    [   6.420336620664382e-07,    6.048462567663855,      -0.5295916682549315],
    [   3.690511440326247e-07,    2.420570631006658,     -0.03813014298550854],
    [  2.3374169096960414e-07,   3.6419863707826567,      -0.0746417844149151],
    [  1.8676157502101635e-07,    4.771735804510758,        2.118541196946008],
    [  1.4123704141879442e-07,   1.7805908717364467,       0.8536809248582067],
    [  1.0351559819962255e-07,    2.351411775787744,  -2.7643173955567947e-05],
    [   7.611216031865353e-08,   1.7966014740491707,   5.6421894029068415e-05],
    [  4.6653008972588353e-08,    3.250140585092845,    3.435775578462147e-05],
    [   4.279617633713814e-08,    4.969133657130676,      0.11449764618006646],
    [  3.7995903383119504e-08,   0.2582344751347989,     -0.07476941926799063],
    [  3.4430152547841396e-08,   0.6983976682063178,     -0.42690466782138986],
    [    2.93520613733033e-08,   3.4922221294558824,       0.2989232309124862],
    [  2.5365406442738212e-08,    4.851866293686199,       12.566095136124403],
    [   2.342737868820225e-08,    2.712111778397396,      -1.0592149591182891],
    [  1.7958500634745925e-08,    2.296896356038776,   4.6832245285838647e-07],
    [  1.7731685800634006e-08,    6.246326509752162,     -0.42695014908409623],
    [  1.5523705529226995e-08,    5.705191896645076,       -1.059217694265648],
    [  1.4266795853592073e-08,    5.673184953440832,     -0.03824091135368391],
    [   8.819727637385675e-09,    5.115006475523469,        2.648167222956724],
    [   7.423596134538549e-09,    1.036301598728973,       1.0671194371819237],
    [  5.9859606983145125e-09,   0.9137799025501572,       20.426570523325772],
    [  4.7556651834469774e-09,   3.8153541337209074,    5.449639792904921e-05],
    [   3.681326666389454e-09,   1.1586650961814797,     -0.14935478748039535],
    [   2.696394780346782e-09,    5.883148403331082,  -5.6416202510377665e-05],
    [  1.5851339910357867e-09,    4.167379781882197,     -0.07631478236894614],
    [  1.5512966615753312e-09,    2.642089642317116,      -10.213382429379205],
    [  1.3898434561908258e-09,   1.4426869412104972,       -0.640343180145107],
    [   1.353836747435474e-09,    5.975543404043691,      0.37363623397796636],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_X1: [[f64; 3]; 15] = [
    [  2.1105507235266424e-08,    4.757747963752809,   -7.312443666192485e-05],
    [   9.939984322246149e-09,     3.39865312043693,    3.709290314332382e-05],
    [   6.989698004910514e-09,  0.12757676415535857,      0.42680390021077236],
    [  3.2959761393085186e-09,   0.9436018088862017,       1.0592891449245758],
    [  2.8359892529110016e-09,   0.8718660371592667,      0.21336538788705522],
    [  1.1860129613045204e-09,   0.7847831489867412,    -5.62719702463221e-05],
    [   8.346334504983396e-10,    5.467036266405929,       0.0747842217160454],
    [   7.690819190178666e-10,   0.6003311378659665,       0.5296631189138595],
    [   6.122998970930263e-10,    6.125307645388267,    7.121865056514843e-05],
    [   5.612261230511233e-10,    5.666472798333048,       0.6402424125344895],
    [  3.9527207571889875e-10,  0.43275750082353914,      0.07631300679662886],
    [   2.384053921760052e-10,   1.2868724799238578,        1.588915170935292],
    [  2.0314239840359306e-10,   1.6671722338345019,      0.14949722478152566],
    [   1.885256008497753e-10,   2.3604445831839915,     -0.21351163676037907],
    [  1.2695916413877141e-10,    2.179566651702304,      0.03812836741319127],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_X2: [[f64; 3]; 0] = [
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Y0: [[f64; 3]; 48] = [
    [    0.004954570236542359,    2.171127464660754,       0.5296631189138595],
    [    0.002717520588191787,    2.442662363953776,      0.21336538788705522],
    [    0.001546517587482727,   0.6087703249073675,      0.03812836741319127],
    [   0.0008357510511747491,   0.7546472860209104,       0.0747842217160454],
    [  0.00036002101347267163,   4.9694494472317645,    3.709290314332382e-05],
    [  0.00021987475240186903,  0.04535898336816713,   -7.312443666192485e-05],
    [  0.00011979635012968691,    2.514398135679534,       1.0592891449245758],
    [   7.313217909455902e-05,   1.6983730909495929,      0.42680390021077236],
    [  5.9309414210640983e-05,   1.4129186650042138,    7.121865056514843e-05],
    [  1.9928727942731565e-05,   5.4971721293727045,    -5.62719702463221e-05],
    [   1.973670158258668e-05,    3.237968560627402,      0.14949722478152566],
    [   6.642541651183232e-06,    5.145146481211416,      0.07631300679662886],
    [   4.344826601856699e-06,   2.8576688066982996,        1.588915170935292],
    [  3.0359437929550865e-06,   3.3242338838676817,        6.283075779009216],
    [  2.9521298347520925e-06,   0.9540838179454134,       0.6402424125344895],
    [  1.7666450506690805e-06,    4.746930782884263,       10.213285495824113],
    [  1.4528063851775225e-06,   1.4845861226231323,      -0.5295889331075729],
    [   1.279390954320737e-06,    4.666497375586824,     -0.21346615549767273],
    [    9.87859970263899e-07,    3.931240909962146,     -0.21351163676037907],
    [   6.991389251890532e-07,    5.721289835233801,       0.2242102278470059],
    [   6.420336620664382e-07,    4.477666240868959,      -0.5295916682549315],
    [   3.690511440326247e-07,   0.8497743042117616,     -0.03813014298550854],
    [  2.3374169096960414e-07,   2.0711900439877606,      -0.0746417844149151],
    [  1.8676157502101635e-07,   3.2009394777158615,        2.118541196946008],
    [  1.4123704141879442e-07,  0.20979454494155014,       0.8536809248582067],
    [  1.0351559819962255e-07,   0.7806154489928474,  -2.7643173955567947e-05],
    [   7.611216031865353e-08,  0.22580514725427414,   5.6421894029068415e-05],
    [  4.6653008972588353e-08,   1.6793442582979483,    3.435775578462147e-05],
    [   4.279617633713814e-08,   3.3983373303357802,      0.11449764618006646],
    [  3.7995903383119504e-08,    4.970623455519489,     -0.07476941926799063],
    [  3.4430152547841396e-08,    5.410786648591007,     -0.42690466782138986],
    [    2.93520613733033e-08,   1.9214258026609858,       0.2989232309124862],
    [  2.5365406442738212e-08,   3.2810699668913026,       12.566095136124403],
    [   2.342737868820225e-08,   1.1413154516024995,      -1.0592149591182891],
    [  1.7958500634745925e-08,   0.7261000292438795,   4.6832245285838647e-07],
    [  1.7731685800634006e-08,   4.6755301829572655,     -0.42695014908409623],
    [  1.5523705529226995e-08,    4.134395569850179,       -1.059217694265648],
    [  1.4266795853592073e-08,   4.1023886266459355,     -0.03824091135368391],
    [   8.819727637385675e-09,    3.544210148728572,        2.648167222956724],
    [   7.423596134538549e-09,    5.748690579113663,       1.0671194371819237],
    [  5.9859606983145125e-09,    5.626168882934847,       20.426570523325772],
    [  4.7556651834469774e-09,    2.244557806926011,    5.449639792904921e-05],
    [   3.681326666389454e-09,    5.871054076566169,     -0.14935478748039535],
    [   2.696394780346782e-09,    4.312352076536185,  -5.6416202510377665e-05],
    [  1.5851339910357867e-09,      2.5965834550873,     -0.07631478236894614],
    [  1.5512966615753312e-09,   1.0712933155222193,      -10.213382429379205],
    [  1.3898434561908258e-09,    6.155075921595187,       -0.640343180145107],
    [   1.353836747435474e-09,    4.404747077248793,      0.37363623397796636],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Y1: [[f64; 3]; 15] = [
    [  2.1105507235266424e-08,   3.1869516369579127,   -7.312443666192485e-05],
    [   9.939984322246149e-09,   1.8278567936420336,    3.709290314332382e-05],
    [   6.989698004910514e-09,    4.839965744540049,      0.42680390021077236],
    [  3.2959761393085186e-09,    5.655990789270891,       1.0592891449245758],
    [  2.8359892529110016e-09,    5.584255017543956,      0.21336538788705522],
    [  1.1860129613045204e-09,    5.497172129371431,    -5.62719702463221e-05],
    [   8.346334504983396e-10,    3.896239939611032,       0.0747842217160454],
    [   7.690819190178666e-10,    5.312720118250656,       0.5296631189138595],
    [   6.122998970930263e-10,     4.55451131859337,    7.121865056514843e-05],
    [   5.612261230511233e-10,    4.095676471538152,       0.6402424125344895],
    [  3.9527207571889875e-10,    5.145146481208229,      0.07631300679662886],
    [   2.384053921760052e-10,   5.9992614603085475,        1.588915170935292],
    [  2.0314239840359306e-10,   0.0963759070396053,      0.14949722478152566],
    [   1.885256008497753e-10,    0.789648256389095,     -0.21351163676037907],
    [  1.2695916413877141e-10,   0.6087703249074075,      0.03812836741319127],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Y2: [[f64; 3]; 0] = [
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Z0: [[f64; 3]; 23] = [
    [  0.00011792830463824826,  0.45887882097837274,      0.21341577169236398],
    [  0.00011280072469506567,  0.41752693869079427,       0.5296273935843956],
    [   4.778050166865713e-05,    4.591886990732492,     0.038129255199349905],
    [  1.1270335610401817e-05,    5.745993549225194,      0.07477682049201802],
    [   9.541586141490923e-06,     4.34476074757235,  -2.2740631353178453e-05],
    [   8.196600166376946e-06,   3.2158489212618044,   1.3675736793511775e-06],
    [  3.1736112442337194e-06,    5.997774855153776,       0.4268542840160811],
    [  2.7274040865919567e-06,   0.7607976097095741,       1.0592534195951118],
    [   7.998039632384423e-07,   0.1210796210289109,    6.381742653776305e-05],
    [   6.157088845473829e-07,   3.1971034880182434,   -5.538418408768566e-05],
    [  2.6615491582742887e-07,   1.9461295166520989,      0.14948982355749826],
    [  2.0522493569898034e-07,   2.8450778398569536,       0.0763138945827875],
    [   1.281093022798238e-07,    5.253485582149596,       0.6402927963397983],
    [  1.0470130026492419e-07,   3.4086150604759187,        10.21333396260166],
    [   9.891868839583967e-08,     1.10406828072834,        1.588879445605828],
    [   4.286872821476129e-08,   1.9474573669867423,     -0.21346125295507032],
    [  3.3076050043849685e-08,    6.014170903832759,      -0.5296246584370369],
    [   9.428083056671727e-09,    4.429450791258498,       0.2242028266229785],
    [   6.129059304652084e-09,    4.509196309145732,       0.8537313086635154],
    [   4.252001687691164e-09,    1.447338951745901,        2.118505471616544],
    [   3.152071779828901e-09,   0.7793510000124577,     -0.07464918563894249],
    [  1.3222111351589218e-09,   1.0982686889813191,       0.1144985339662251],
    [  1.0643215322479453e-09,    5.670969614015121,    4.893509999911625e-05],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Z1: [[f64; 3]; 7] = [
    [    1.60635597797889e-09,   3.5591195922805885,       0.5296273935843956],
    [   8.415519272762931e-10,   1.2031680939825051,  -2.2740631353178453e-05],
    [   7.956442978762764e-10,  0.45887882097831234,      0.21341577169236398],
    [  3.6563696055422445e-10,   2.6044008956354103,      0.07477682049201802],
    [   3.417562804272659e-10,  0.07425626767205262,   1.3675736793511775e-06],
    [   2.785979605964175e-10,    2.856182201564704,       0.4268542840160811],
    [  1.1345615415136546e-10,   3.9023902633004024,       1.0592534195951118],
];

#[rustfmt::skip]
pub(crate) static SSB_SUN_Z2: [[f64; 3]; 0] = [
];

static SUN_EARTH: SeriesSet<'static> = [
    [&SUN_EARTH_X0, &SUN_EARTH_X1, &SUN_EARTH_X2],
    [&SUN_EARTH_Y0, &SUN_EARTH_Y1, &SUN_EARTH_Y2],
    [&SUN_EARTH_Z0, &SUN_EARTH_Z1, &SUN_EARTH_Z2],
];

static SSB_SUN: SeriesSet<'static> = [
    [&SSB_SUN_X0, &SSB_SUN_X1, &SSB_SUN_X2],
    [&SSB_SUN_Y0, &SSB_SUN_Y1, &SSB_SUN_Y2],
    [&SSB_SUN_Z0, &SSB_SUN_Z1, &SSB_SUN_Z2],
];

/// Earth ephemeris from the embedded compact series.
///
/// Needs no data files. Position errors are a few 1e-5 au and velocity
/// errors below 1e-6 au/day between 1900 and 2100; this is adequate for
/// aberration at the 0.1 mas level but not for parallax-grade work.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactEarth;

impl EarthEphemeris for CompactEarth {
    fn earth_state(&self, tdb: TwoPartTime) -> EarthState {
        evaluate(&SUN_EARTH, &SSB_SUN, tdb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn matches_epv00_reference() {
        let s = CompactEarth.earth_state(TwoPartTime::new(2_400_000.5, 53_411.525_011_61));
        assert!(s.in_range);

        let ph = [-0.775_723_880_929_770_681_3, 0.559_805_224_136_334_059_6, 0.242_699_846_648_168_699_3];
        let vh = [-0.109_189_182_414_731_384_6e-1, -0.124_718_726_844_084_500_8e-1, -0.540_756_941_806_503_906_1e-2];
        let pb = [-0.771_410_444_049_111_197_1, 0.559_841_206_182_417_132_3, 0.242_599_627_772_245_240_0];
        let vb = [-0.109_187_426_811_682_329_5e-1, -0.124_652_546_173_286_153_8e-1, -0.540_477_318_096_623_127_9e-2];
        for i in 0..3 {
            assert_abs_diff_eq!(s.heliocentric.position[i], ph[i], epsilon = 5e-5);
            assert_abs_diff_eq!(s.heliocentric.velocity[i], vh[i], epsilon = 1e-6);
            assert_abs_diff_eq!(s.barycentric.position[i], pb[i], epsilon = 5e-5);
            assert_abs_diff_eq!(s.barycentric.velocity[i], vb[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn earth_sun_distance_stays_near_one_au() {
        for day in (0..3653).step_by(30) {
            let s = CompactEarth.earth_state(TwoPartTime::new(2_451_545.0, f64::from(day)));
            let r = drishti_math::modulus(&s.heliocentric.position);
            assert!((0.983..=1.017).contains(&r), "day {day}: r = {r}");
        }
    }
}

//! Region to location lookup used for the project location dropdown.

use crate::country::Country;
use crate::field::{FieldOption, OptionGroup};
use crate::locale::{Localise, Locale, Localised};

/// `(value, English label, Welsh label)`
type Location = (&'static str, &'static str, &'static str);

struct Region {
    slug: &'static str,
    country: Country,
    label: (&'static str, &'static str),
    locations: &'static [Location],
}

const REGIONS: &[Region] = &[
    Region {
        slug: "north-east-and-cumbria",
        country: Country::England,
        label: ("North East & Cumbria", "Gogledd Ddwyrain a Cumbria"),
        locations: &[
            ("county-durham", "County Durham", "Swydd Durham"),
            ("cumbria", "Cumbria", "Cumbria"),
            ("darlington", "Darlington", "Darlington"),
            ("gateshead", "Gateshead", "Gateshead"),
            ("hartlepool", "Hartlepool", "Hartlepool"),
            ("middlesbrough", "Middlesbrough", "Middlesbrough"),
            ("newcastle-upon-tyne", "Newcastle upon Tyne", "Newcastle upon Tyne"),
            ("north-tyneside", "North Tyneside", "Gogledd Tyneside"),
            ("northumberland", "Northumberland", "Northumberland"),
            ("redcar-and-cleveland", "Redcar and Cleveland", "Redcar a Cleveland"),
            ("south-tyneside", "South Tyneside", "De Tyneside"),
            ("stockton-on-tees", "Stockton-on-Tees", "Stockton-on-Tees"),
            ("sunderland", "Sunderland", "Sunderland"),
        ],
    },
    Region {
        slug: "north-west",
        country: Country::England,
        label: ("North West", "Gogledd Orllewin"),
        locations: &[
            ("blackburn-with-darwen", "Blackburn with Darwen", "Blackburn gyda Darwen"),
            ("blackpool", "Blackpool", "Blackpool"),
            ("cheshire-east", "Cheshire East", "Dwyrain Swydd Gaer"),
            (
                "cheshire-west-and-chester",
                "Cheshire West and Chester",
                "Gorllewin Swydd Gaer a Chaer",
            ),
            ("greater-manchester", "Greater Manchester", "Manceinion Fwyaf"),
            ("halton", "Halton", "Halton"),
            ("lancashire", "Lancashire", "Swydd Gaerhirfryn"),
            ("merseyside", "Merseyside", "Glannau Merswy"),
            ("warrington", "Warrington", "Warrington"),
        ],
    },
    Region {
        slug: "yorkshire-and-the-humber",
        country: Country::England,
        label: ("Yorkshire and the Humber", "Swydd Efrog a'r Humber"),
        locations: &[
            ("east-riding-of-yorkshire", "East Riding of Yorkshire", "Dwyrain Swydd Efrog"),
            ("hull", "Hull", "Hull"),
            ("north-east-lincolnshire", "North East Lincolnshire", "Gogledd Ddwyrain Swydd Lincoln"),
            ("north-lincolnshire", "North Lincolnshire", "Gogledd Swydd Lincoln"),
            ("north-yorkshire", "North Yorkshire", "Gogledd Swydd Efrog"),
            ("south-yorkshire", "South Yorkshire", "De Swydd Efrog"),
            ("west-yorkshire", "West Yorkshire", "Gorllewin Swydd Efrog"),
            ("york", "York", "Efrog"),
        ],
    },
    Region {
        slug: "midlands",
        country: Country::England,
        label: ("East and West Midlands", "Dwyrain a Gorllewin Canolbarth Lloegr"),
        locations: &[
            ("derby", "Derby", "Derby"),
            ("derbyshire", "Derbyshire", "Swydd Derby"),
            ("herefordshire", "Herefordshire", "Swydd Henffordd"),
            ("leicester", "Leicester", "Caerlŷr"),
            ("leicestershire", "Leicestershire", "Swydd Gaerlŷr"),
            ("lincolnshire", "Lincolnshire", "Swydd Lincoln"),
            ("northamptonshire", "Northamptonshire", "Swydd Northampton"),
            ("nottingham", "Nottingham", "Nottingham"),
            ("nottinghamshire", "Nottinghamshire", "Swydd Nottingham"),
            ("rutland", "Rutland", "Rutland"),
            ("shropshire", "Shropshire", "Swydd Amwythig"),
            ("staffordshire", "Staffordshire", "Swydd Stafford"),
            ("stoke-on-trent", "Stoke-on-Trent", "Stoke-on-Trent"),
            ("telford-and-wrekin", "Telford and Wrekin", "Telford a Wrekin"),
            ("warwickshire", "Warwickshire", "Swydd Warwick"),
            ("west-midlands", "West Midlands", "Gorllewin Canolbarth Lloegr"),
            ("worcestershire", "Worcestershire", "Swydd Gaerwrangon"),
        ],
    },
    Region {
        slug: "london-and-south-east",
        country: Country::England,
        label: ("London, South East and East", "Llundain, De Ddwyrain a Dwyrain"),
        locations: &[
            ("bedford", "Bedford", "Bedford"),
            ("brighton-and-hove", "Brighton and Hove", "Brighton a Hove"),
            ("buckinghamshire", "Buckinghamshire", "Swydd Buckingham"),
            ("cambridgeshire", "Cambridgeshire", "Swydd Caergrawnt"),
            ("east-sussex", "East Sussex", "Dwyrain Sussex"),
            ("essex", "Essex", "Essex"),
            ("greater-london", "Greater London", "Llundain Fwyaf"),
            ("hampshire", "Hampshire", "Hampshire"),
            ("hertfordshire", "Hertfordshire", "Swydd Hertford"),
            ("isle-of-wight", "Isle of Wight", "Ynys Wyth"),
            ("kent", "Kent", "Caint"),
            ("norfolk", "Norfolk", "Norfolk"),
            ("oxfordshire", "Oxfordshire", "Swydd Rydychen"),
            ("suffolk", "Suffolk", "Suffolk"),
            ("surrey", "Surrey", "Surrey"),
            ("west-sussex", "West Sussex", "Gorllewin Sussex"),
        ],
    },
    Region {
        slug: "south-west",
        country: Country::England,
        label: ("South West", "De Orllewin"),
        locations: &[
            (
                "bath-and-north-east-somerset",
                "Bath and North East Somerset",
                "Caerfaddon a Gogledd Ddwyrain Gwlad yr Haf",
            ),
            ("bristol", "Bristol", "Bryste"),
            ("cornwall", "Cornwall", "Cernyw"),
            ("devon", "Devon", "Dyfnaint"),
            ("dorset", "Dorset", "Dorset"),
            ("gloucestershire", "Gloucestershire", "Swydd Gaerloyw"),
            ("isles-of-scilly", "Isles of Scilly", "Ynysoedd Syllan"),
            ("plymouth", "Plymouth", "Plymouth"),
            ("somerset", "Somerset", "Gwlad yr Haf"),
            ("wiltshire", "Wiltshire", "Wiltshire"),
        ],
    },
    Region {
        slug: "scotland",
        country: Country::Scotland,
        label: ("Scotland", "Yr Alban"),
        locations: &[
            ("aberdeen-city", "Aberdeen City", "Dinas Aberdeen"),
            ("aberdeenshire", "Aberdeenshire", "Swydd Aberdeen"),
            ("angus", "Angus", "Angus"),
            ("argyll-and-bute", "Argyll and Bute", "Argyll a Bute"),
            ("clackmannanshire", "Clackmannanshire", "Clackmannanshire"),
            ("dumfries-and-galloway", "Dumfries and Galloway", "Dumfries a Galloway"),
            ("dundee-city", "Dundee City", "Dinas Dundee"),
            ("east-ayrshire", "East Ayrshire", "Dwyrain Ayrshire"),
            ("east-dunbartonshire", "East Dunbartonshire", "Dwyrain Dunbartonshire"),
            ("east-lothian", "East Lothian", "Dwyrain Lothian"),
            ("east-renfrewshire", "East Renfrewshire", "Dwyrain Renfrewshire"),
            ("edinburgh", "Edinburgh", "Caeredin"),
            ("falkirk", "Falkirk", "Falkirk"),
            ("fife", "Fife", "Fife"),
            ("glasgow", "Glasgow", "Glasgow"),
            ("highland", "Highland", "Ucheldiroedd"),
            ("inverclyde", "Inverclyde", "Inverclyde"),
            ("midlothian", "Midlothian", "Midlothian"),
            ("moray", "Moray", "Moray"),
            ("na-h-eileanan-siar", "Na h-Eileanan Siar", "Na h-Eileanan Siar"),
            ("north-ayrshire", "North Ayrshire", "Gogledd Ayrshire"),
            ("north-lanarkshire", "North Lanarkshire", "Gogledd Lanarkshire"),
            ("orkney-islands", "Orkney Islands", "Ynysoedd Erch"),
            ("perth-and-kinross", "Perth and Kinross", "Perth a Kinross"),
            ("renfrewshire", "Renfrewshire", "Renfrewshire"),
            ("scottish-borders", "Scottish Borders", "Gororau'r Alban"),
            ("shetland-islands", "Shetland Islands", "Ynysoedd Shetland"),
            ("south-ayrshire", "South Ayrshire", "De Ayrshire"),
            ("south-lanarkshire", "South Lanarkshire", "De Lanarkshire"),
            ("stirling", "Stirling", "Stirling"),
            ("west-dunbartonshire", "West Dunbartonshire", "Gorllewin Dunbartonshire"),
            ("west-lothian", "West Lothian", "Gorllewin Lothian"),
        ],
    },
    Region {
        slug: "wales",
        country: Country::Wales,
        label: ("Wales", "Cymru"),
        locations: &[
            ("blaenau-gwent", "Blaenau Gwent", "Blaenau Gwent"),
            ("bridgend", "Bridgend", "Pen-y-bont ar Ogwr"),
            ("caerphilly", "Caerphilly", "Caerffili"),
            ("cardiff", "Cardiff", "Caerdydd"),
            ("carmarthenshire", "Carmarthenshire", "Sir Gaerfyrddin"),
            ("ceredigion", "Ceredigion", "Ceredigion"),
            ("conwy", "Conwy", "Conwy"),
            ("denbighshire", "Denbighshire", "Sir Ddinbych"),
            ("flintshire", "Flintshire", "Sir y Fflint"),
            ("gwynedd", "Gwynedd", "Gwynedd"),
            ("isle-of-anglesey", "Isle of Anglesey", "Ynys Môn"),
            ("merthyr-tydfil", "Merthyr Tydfil", "Merthyr Tudful"),
            ("monmouthshire", "Monmouthshire", "Sir Fynwy"),
            ("neath-port-talbot", "Neath Port Talbot", "Castell-nedd Port Talbot"),
            ("newport", "Newport", "Casnewydd"),
            ("pembrokeshire", "Pembrokeshire", "Sir Benfro"),
            ("powys", "Powys", "Powys"),
            ("rhondda-cynon-taf", "Rhondda Cynon Taf", "Rhondda Cynon Taf"),
            ("swansea", "Swansea", "Abertawe"),
            ("torfaen", "Torfaen", "Torfaen"),
            ("vale-of-glamorgan", "Vale of Glamorgan", "Bro Morgannwg"),
            ("wrexham", "Wrexham", "Wrecsam"),
        ],
    },
    Region {
        slug: "northern-ireland",
        country: Country::NorthernIreland,
        label: ("Northern Ireland", "Gogledd Iwerddon"),
        locations: &[
            ("antrim-and-newtownabbey", "Antrim and Newtownabbey", "Antrim a Newtownabbey"),
            ("ards-and-north-down", "Ards and North Down", "Ards a Gogledd Down"),
            (
                "armagh-banbridge-and-craigavon",
                "Armagh City, Banbridge and Craigavon",
                "Dinas Armagh, Banbridge a Craigavon",
            ),
            ("belfast", "Belfast", "Belffast"),
            ("causeway-coast-and-glens", "Causeway Coast and Glens", "Causeway Coast a Glens"),
            ("derry-and-strabane", "Derry and Strabane", "Derry a Strabane"),
            ("fermanagh-and-omagh", "Fermanagh and Omagh", "Fermanagh ac Omagh"),
            ("lisburn-and-castlereagh", "Lisburn and Castlereagh", "Lisburn a Castlereagh"),
            ("mid-and-east-antrim", "Mid and East Antrim", "Canol a Dwyrain Antrim"),
            ("mid-ulster", "Mid Ulster", "Canol Ulster"),
            ("newry-mourne-and-down", "Newry, Mourne and Down", "Newry, Mourne a Down"),
        ],
    },
];

fn location_options(region: &Region, locale: Locale) -> Vec<FieldOption> {
    region
        .locations
        .iter()
        .map(|(value, en, cy)| FieldOption::new(*value, locale.localise(&Localised::new(*en, *cy))))
        .collect()
}

/// Locations for `country`, grouped by region, in table order.
pub fn location_groups(country: Country, locale: Locale) -> Vec<OptionGroup> {
    REGIONS
        .iter()
        .filter(|region| region.country == country)
        .map(|region| OptionGroup {
            label: locale.pick(region.label.0, region.label.1),
            options: location_options(region, locale),
        })
        .collect()
}

/// English funding regions, preceded by an "all of England" choice.
pub fn england_regions(locale: Locale) -> Vec<FieldOption> {
    let all = FieldOption::new("all-england", locale.pick("All of England", "Lloegr i gyd"));
    std::iter::once(all)
        .chain(
            REGIONS
                .iter()
                .filter(|region| region.country == Country::England)
                .map(|region| FieldOption::new(region.slug, locale.pick(region.label.0, region.label.1))),
        )
        .collect()
}

/// Country a location value belongs to.
pub fn country_of(location: &str) -> Option<Country> {
    REGIONS
        .iter()
        .find(|region| region.locations.iter().any(|(value, _, _)| *value == location))
        .map(|region| region.country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_belong_to_their_country() {
        assert_eq!(country_of("derbyshire"), Some(Country::England));
        assert_eq!(country_of("cardiff"), Some(Country::Wales));
        assert_eq!(country_of("atlantis"), None);
    }

    #[test]
    fn england_regions_start_with_all_of_england() {
        let regions = england_regions(Locale::Cy);
        assert_eq!(regions[0].value, "all-england");
        assert_eq!(regions[0].label, "Lloegr i gyd");
        assert!(regions.iter().all(|option| option.value != "wales"));
    }
}

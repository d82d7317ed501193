//! Built-in playground catalogs.
//!
//! Inert data only: templates are authored as bare `name: value` strings and
//! quoting the key is left to the insertion editor. Definition order is the
//! display order.

use super::{Catalog, CatalogSet, CompletionEntry};

fn entry(label: &str, template: &str, category: &str) -> CompletionEntry {
    CompletionEntry::new(label, template, category)
}

/// The full default catalog set.
pub fn catalog_set() -> CatalogSet {
    CatalogSet {
        keywords: keywords(),
        query_operators: query_operators(),
        aggregation_operators: aggregation_operators(),
        update_operators: update_operators(),
        methods: methods(),
        collections: collections(),
    }
}

/// Query method names offered after `db.<collection>.`.
fn methods() -> Catalog {
    Catalog::new(vec![
        entry("find()", "find()", "method"),
        entry("aggregate()", "aggregate()", "method"),
        entry("update()", "update()", "method"),
        entry("explain()", "explain()", "method"),
    ])
}

/// Collection names offered after `db.`.
fn collections() -> Catalog {
    Catalog::new(vec![entry("collection", "collection", "collection name")])
}

/// Scalar/literal BSON keywords, valid in every operator position.
fn keywords() -> Catalog {
    Catalog::new(vec![
        entry("true", "true", "bson keyword"),
        entry("false", "false", "bson keyword"),
        entry("null", "null", "bson keyword"),
        entry("$numberDecimal", "$numberDecimal: ", "bson keyword"),
        entry("$numberDouble", "$numberDouble: ", "bson keyword"),
        entry("$numberLong", "$numberLong: ", "bson keyword"),
        entry("$numberInt", "$numberInt: ", "bson keyword"),
        entry("$oid", "$oid: ", "bson keyword"),
        entry(
            "$regularExpression",
            "$regularExpression: {\n \"pattern\": \"pattern\",\n \"options\": \"options\"\n}",
            "bson keyword",
        ),
        entry("$timestamp", "$timestamp: {\"t\": 0, \"i\": 1}", "bson keyword"),
        entry("$date", "$date: ", "bson keyword"),
    ])
}

/// Match-query operators offered inside `.find(` queries.
fn query_operators() -> Catalog {
    Catalog::new(vec![
        entry("$eq", "$eq: \"value\"", "comparison operator"),
        entry("$gt", "$gt: \"value\"", "comparison operator"),
        entry("$gte", "$gte: \"value\"", "comparison operator"),
        entry("$in", "$in: [\"value1\", \"value2\"]", "comparison operator"),
        entry(
            "$let",
            "$let: {\n \"vars\": { \"var\": \"expression\" },\n \"in\": \"expression\"\n}",
            "variable operator",
        ),
        entry("$lt", "$lt: \"value\"", "comparison operator"),
        entry("$lte", "$lte: \"value\"", "comparison operator"),
        entry("$ne", "$ne: \"value\"", "comparison operator"),
        entry("$nin", "$nin: [\"value1\", \"value2\"]", "comparison operator"),
        entry("$not", "$not: { }", "logical operator"),
        entry(
            "$nor",
            "$nor: [ { \"expression1\" }, { \"expression2\" } ]",
            "logical operator",
        ),
        entry(
            "$and",
            "$and: [ { \"expression1\" }, { \"expression2\" } ]",
            "logical operator",
        ),
        entry(
            "$or",
            "$or: [ { \"expression1\" }, { \"expression2\" } ]",
            "logical operator",
        ),
        entry("$exists", "$exists: \"value\"", "element operator"),
        entry("$type", "$type: \"bson type\"", "element operator"),
        entry("$expr", "$expr: { \"expression\" }", "evaluation operator"),
        entry("$jsonSchema", "$jsonSchema: { \"schema\" }", "evaluation operator"),
        entry("$mod", "$mod: [ \"divisor\", \"remainder\" ]", "evaluation operator"),
        entry("$regex", "$regex: \"pattern\"", "evaluation operator"),
        entry("$where", "$where: \"code\"", "evaluation operator"),
        entry(
            "$geoIntersects",
            "$geoIntersects: {\n \"$geometry\": {\n  \"type\": \"GeoJSON type\",\n  \"coordinates\": [  ]\n }\n}",
            "geospatial operator",
        ),
        entry(
            "$geoWithin",
            "$geoWithin: {\n \"$geometry\": {\n  \"type\": \"Polygon\",\n  \"coordinates\": [  ]\n }\n}",
            "geospatial operator",
        ),
        entry(
            "$near",
            "$near: {\n \"$geometry\": {\n  \"type\": \"Point\",\n  \"coordinates\": [ \"long\", \"lat\" ]\n }, \"$maxDistance\": 10, \"$minDistance\": 1\n}",
            "geospatial operator",
        ),
        entry(
            "$nearSphere",
            "$nearSphere: {\n \"$geometry\": {\n  \"type\": \"Point\",\n  \"coordinates\": [ \"long\", \"lat\" ]\n }, \"$maxDistance\": 10, \"$minDistance\": 1\n}",
            "geospatial operator",
        ),
        entry("$box", "$box:  [ [ 0, 0 ], [ 100, 100 ] ]", "geospatial operator"),
        entry("$center", "$center: [ [ \"x\", \"y\" ] , \"radius\" ]", "geospatial operator"),
        entry(
            "$centerSphere",
            "$centerSphere: [ [ \"x\", \"y\" ] , \"radius\" ]",
            "geospatial operator",
        ),
        entry(
            "$geometry",
            "$geometry: {\n \"type\": \"Polygon\",\n \"coordinates\": [ ]\n}",
            "geospatial operator",
        ),
        entry("$maxDistance", "$maxDistance: 10", "geospatial operator"),
        entry("$minDistance", "$minDistance: 10", "geospatial operator"),
        entry(
            "$polygon",
            "$polygon: [ [ 0 , 0 ], [ 3 , 6 ], [ 6 , 0 ] ]",
            "geospatial operator",
        ),
        entry("$all", "$all: [ \"value1\" , \"value2\" ]", "array operator"),
        entry("$elemMatch", "$elemMatch: { \"query1\", \"query2\" }", "array operator"),
        entry("$size", "$size: 1", "array operator"),
        entry("$bitsAllClear", "$bitsAllClear: [ \"pos1\", \"pos2\" ]", "bitwise operator"),
        entry("$bitsAllSet", "$bitsAllSet: [ \"pos1\", \"pos2\" ]", "bitwise operator"),
        entry("$bitsAnyClear", "$bitsAnyClear: [ \"pos1\", \"pos2\" ]", "bitwise operator"),
        entry("$bitsAnySet", "$bitsAnySet: [ \"pos1\", \"pos2\" ]", "bitwise operator"),
        entry("$slice", "$slice: 2", "projection operator"),
    ])
}

/// Aggregation operators and stages offered inside `.aggregate(` queries.
fn aggregation_operators() -> Catalog {
    Catalog::new(vec![
        entry("$abs", "$abs: -1", "arithmetic operator"),
        entry(
            "$accumulator",
            "$accumulator: {\n \"init\": \"code\",\n \"initArgs\": \"array expression\",\n \"accumulate\": \"code\",\n \"accumulateArgs\": \"array expression\",\n \"merge\": \"code\",\n \"finalize\": \"code\",\n \"lang\": \"string\"\n}",
            "accumulation operator",
        ),
        entry("$acos", "$acos: \"expression\"", "trigonometry operator"),
        entry("$acosh", "$acosh: \"expression\"", "trigonometry operator"),
        entry("$add", "$add: [ \"expression1\", \"expression2\" ]", "arithmetic operator"),
        entry(
            "$addFields",
            "$addFields: { \"newField\": \"expression\" }",
            "aggregation stage",
        ),
        entry("$addToSet", "$addToSet: \"expression\"", "accumulation operator"),
        entry("$allElementsTrue", "$allElementsTrue: [ \"expression\" ]", "set operator"),
        entry("$and", "$and: [ \"expression1\", \"expression2\" ]", "boolean operator"),
        entry("$anyElementTrue", "$anyElementTrue: [ \"expression\" ]", "set operator"),
        entry("$arrayElemAt", "$arrayElemAt: [ \"array\", \"idx\" ]", "array operator"),
        entry("$arrayToObject", "$arrayToObject: \"expression\"", "array operator"),
        entry("$asin", "$asin: \"expression\"", "trigonometry operator"),
        entry("$asinh", "$asinh: \"expression\"", "trigonometry operator"),
        entry("$atan", "$atan: \"expression\"", "trigonometry operator"),
        entry(
            "$atan2",
            "$atan2: [ \"expression 1\", \"expression 2\" ]",
            "trigonometry operator",
        ),
        entry("$atanh", "$atanh: \"expression\"", "trigonometry operator"),
        entry("$avg", "$avg: \"expression\"", "accumulation operator"),
        entry("$binarySize", "$binarySize: \"string or binData\"", "size operator"),
        entry("$bsonSize", "$bsonSize: \"object\"", "size operator"),
        entry(
            "$bucket",
            "$bucket: {\n \"groupBy\": \"expression\",\n \"boundaries\": [ \"lowerbound1\", \"lowerbound2\" ],\n \"default\": \"literal\",\n \"output\": {\n  \"output1\": \"$accumulator expression\",\n  \"outputN\": \"$accumulator expression\"\n }\n}",
            "aggregation stage",
        ),
        entry(
            "$bucketAuto",
            "$bucketAuto: {\n \"groupBy\": \"expression\",\n \"buckets\": 2,\n \"output\": {\n \"output1\": \"$accumulator expression\"},\n \"granularity\": \"string\"\n}",
            "aggregation stage",
        ),
        entry("$ceil", "$ceil: 3.3", "arithmetic operator"),
        entry("$cmp", "$cmp: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$concat", "$concat: [ \"expression1\", \"expression2\" ]", "string operator"),
        entry("$concatArrays", "$concatArrays: [ \"array1\", \"array2\" ]", "array operator"),
        entry(
            "$cond",
            "$cond: {\n \"if\": \"boolean-expression\",\n \"then\": \"true-case\",\n \"else\": \"false-case\" }",
            "conditional operator",
        ),
        entry(
            "$convert",
            "$convert: {\n \"input\": \"expression\",\n \"to\": \"type expression\",\n \"onError\": \"expression\",\n \"onNull\": \"expression\"\n}",
            "type operator",
        ),
        entry("$cos", "$cos: \"expression\"", "trigonometry operator"),
        entry("$count", "$count: \"string\"", "aggregation stage"),
        entry(
            "$dateFromParts",
            "$dateFromParts : {\n \"year\": \"year\", \"month\": \"month\", \"day\": \"day\",\n \"hour\": \"hour\", \"minute\": \"minute\", \"second\": \"second\",\n \"millisecond\": \"ms\", \"timezone\": \"tzExpression\"\n}",
            "date operator",
        ),
        entry(
            "$dateFromString",
            "$dateFromString: {\n \"dateString\": \"dateStringExpression\",\n \"format\": \"formatStringExpression\",\n \"timezone\": \"tzExpression\",\n \"onError\": \"onErrorExpression\",\n \"onNull\": \"onNullExpression\"\n}",
            "string operator",
        ),
        entry(
            "$dateToParts",
            "$dateToParts: {\n \"date\" : \"dateExpression\",\n \"timezone\" : \"timezone\",\n \"iso8601\" : \"boolean\"\n}",
            "date operator",
        ),
        entry(
            "$dateToString",
            "$dateToString: {\n \"date\": \"dateExpression\",\n \"format\": \"formatString\",\n \"timezone\": \"tzExpression\",\n \"onNull\": \"expression\"\n}",
            "string operator",
        ),
        entry("$dayOfMonth", "$dayOfMonth: \"dateExpression\"", "date operator"),
        entry("$dayOfWeek", "$dayOfWeek: \"dateExpression\"", "date operator"),
        entry("$dayOfYear", "$dayOfYear: \"dateExpression\"", "date operator"),
        entry(
            "$degreesToRadians",
            "$degreesToRadians: \"expression\"",
            "trigonometry operator",
        ),
        entry(
            "$divide",
            "$divide: [ \"expression1\", \"expression2\" ]",
            "arithmetic operator",
        ),
        entry("$eq", "$eq: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$exists", "$exists: true", "aggregation operator"),
        entry("$exp", "$exp: \"exponent\"", "arithmetic operator"),
        entry(
            "$facet",
            "$facet:\n{\n \"outputField1\": [ \"stage1\", \"stage2\" ]\n}",
            "aggregation stage",
        ),
        entry(
            "$filter",
            "$filter: { \"input\": \"array\", \"as\": \"string\", \"cond\": \"expression\" }",
            "array operator",
        ),
        entry("$first", "$first: \"expression\"", "array operator"),
        entry("$floor", "$floor: 1", "arithmetic operator"),
        entry(
            "$function",
            "$function: {\n \"body\": \"code\",\n \"args\": \"array expression\",\n \"lang\": \"js\"\n}",
            "aggregation operator",
        ),
        entry("$geoNear", "$geoNear: { }", "aggregation stage"),
        entry(
            "$graphLookup",
            "$graphLookup: {\n \"from\": \"collection\",\n \"startWith\": \"expression\",\n \"connectFromField\": \"string\",\n \"connectToField\": \"string\",\n \"as\": \"string\",\n \"maxDepth\": 2,\n \"depthField\": \"string\",\n \"restrictSearchWithMatch\": \"document\"\n}",
            "aggregation stage",
        ),
        entry(
            "$group",
            "$group: {\n \"_id\": \"group by expression\",\n \"field\": { \"accumulator\" : \"expression\" }\n}",
            "aggregation stage",
        ),
        entry("$gt", "$gt: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$gte", "$gte: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$hour", "$hour: \"dateExpression\"", "date operator"),
        entry(
            "$ifNull",
            "$ifNull: [ \"expression\", \"replacement-expression-if-null\" ]",
            "conditional operator",
        ),
        entry("$in", "$in: [ \"expression\", \"array expression\" ]", "array operator"),
        entry(
            "$indexOfArray",
            "$indexOfArray: [ \"array expression\", \"search expression\", \"start\", \"end\" ]",
            "array operator",
        ),
        entry(
            "$indexOfBytes",
            "$indexOfBytes: [ \"string expression\", \"substring expression\", \"start\", \"end\" ]",
            "string operator",
        ),
        entry(
            "$indexOfCP",
            "$indexOfCP: [ \"string expression\", \"substring expression\", \"start\", \"end\" ]",
            "string operator",
        ),
        entry("$isArray", "$isArray: [ \"expression\" ]", "array operator"),
        entry("$isNumber", "$isNumber: \"expression\"", "type operator"),
        entry("$isoDayOfWeek", "$isoDayOfWeek: \"dateExpression\"", "date operator"),
        entry("$isoWeek", "$isoWeek: \"dateExpression\"", "date operator"),
        entry("$isoWeekYear", "$isoWeekYear: \"dateExpression\"", "date operator"),
        entry("$last", "$last: \"expression\"", "array operator"),
        entry("$limit", "$limit: \"positive integer\"", "aggregation stage"),
        entry("$ln", "$ln: 10", "arithmetic operator"),
        entry("$log", "$log: [ 100, 10 ]", "arithmetic operator"),
        entry("$log10", "$log10: 4", "arithmetic operator"),
        entry(
            "$lookup",
            "$lookup: {\n \"from\": \"collection to join\",\n \"localField\": \"field from the input documents\",\n \"foreignField\": \"field from the documents of the from collection\",\n \"as\": \"output array field\"\n}",
            "aggregation stage",
        ),
        entry("$lt", "$lt: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$lte", "$lte: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry(
            "$ltrim",
            "$ltrim: { \"input\": \"string\",  \"chars\": \"string\" }",
            "string operator",
        ),
        entry(
            "$map",
            "$map: { \"input\": \"expression\", \"as\": \"string\", \"in\": \"expression\" }",
            "array operator",
        ),
        entry("$match", "$match: { }", "aggregation stage"),
        entry("$max", "$max: \"expression\"", "accumulation operator"),
        entry(
            "$merge",
            "$merge: {\n \"into\": \"collection\",\n \"on\": \"identifier field\",\n \"let\": \"variables\",\n \"whenMatched\": \"replace|keepExisting|merge|fail|pipeline\",\n \"whenNotMatched\": \"insert|discard|fail\"\n}",
            "aggregation stage",
        ),
        entry("$mergeObjects", "$mergeObjects: \"document\"", "object operator"),
        entry("$millisecond", "$millisecond: \"dateExpression\"", "date operator"),
        entry("$min", "$min: \"expression\"", "accumulation operator"),
        entry("$minute", "$minute: \"dateExpression\"", "date operator"),
        entry("$mod", "$mod: [ \"expression1\", \"expression2\" ]", "arithmetic operator"),
        entry("$month", "$month: \"dateExpression\"", "date operator"),
        entry(
            "$multiply",
            "$multiply: [ \"expression1\", \"expression2\" ]",
            "arithmetic operator",
        ),
        entry("$ne", "$ne: [ \"expression1\", \"expression2\" ]", "comparison operator"),
        entry("$not", "$not: [ \"expression\" ]", "boolean operator"),
        entry("$objectToArray", "$objectToArray: \"object\"", "object operator"),
        entry("$or", "$or: [ \"expression1\", \"expression2\" ]", "boolean operator"),
        entry(
            "$out",
            "$out: { \"db\": \"output-db\", \"coll\": \"output-collection\" }",
            "aggregation stage",
        ),
        entry("$pow", "$pow: [ \"number\", \"exponent\" ]", "arithmetic operator"),
        entry("$project", "$project: { }", "aggregation stage"),
        entry("$push", "$push: \"expression\"", "accumulation operator"),
        entry(
            "$radiansToDegrees",
            "$radiansToDegrees: \"expression\"",
            "trigonometry operator",
        ),
        entry("$range", "$range: [ \"start\", \"end\", \"non-zero step\" ]", "array operator"),
        entry("$redact", "$redact: \"expression\"", "aggregation stage"),
        entry(
            "$reduce",
            "$reduce: { \"input\": \"array\", \"initialValue\": \"expression\", \"in\": \"expression\" }",
            "array operator",
        ),
        entry(
            "$regexFind",
            "$regexFind: { \"input\": \"expression\", \"regex\": \"expression\", \"options\": \"expression\" }",
            "string operator",
        ),
        entry(
            "$regexFindAll",
            "$regexFindAll: { \"input\": \"expression\", \"regex\": \"expression\", \"options\": \"expression\" }",
            "string operator",
        ),
        entry(
            "$regexMatch",
            "$regexMatch: { \"input\": \"expression\" , \"regex\": \"expression\", \"options\": \"expression\" }",
            "string operator",
        ),
        entry(
            "$replaceAll",
            "$replaceAll: { \"input\": \"expression\", \"find\": \"expression\", \"replacement\": \"expression\" }",
            "string operator",
        ),
        entry(
            "$replaceOne",
            "$replaceOne: { \"input\": \"expression\", \"find\": \"expression\", \"replacement\": \"expression\" }",
            "string operator",
        ),
        entry(
            "$replaceRoot",
            "$replaceRoot: { \"newRoot\": \"replacementDocument\" }",
            "aggregation stage",
        ),
        entry("$replaceWith", "$replaceWith: \"replacementDocument\"", "aggregation stage"),
        entry("$reverseArray", "$reverseArray: \"array expression\"", "array operator"),
        entry("$round", "$round : [ \"number\", \"place\" ]", "arithmetic operator"),
        entry(
            "$rtrim",
            "$rtrim: { \"input\": \"string\", chars: \"string\" }",
            "string operator",
        ),
        entry("$sample", "$sample: { \"size\": \"positive integer\" }", "aggregation stage"),
        entry("$second", "$second: \"dateExpression\"", "date operator"),
        entry("$set", "$set: { \"newField\": \"expression\" }", "aggregation stage"),
        entry(
            "$setDifference",
            "$setDifference: [ \"expression1\", \"expression2\" ]",
            "set operator",
        ),
        entry(
            "$setEquals",
            "$setEquals: [ \"expression1\", \"expression2\" ]",
            "set operator",
        ),
        entry(
            "$setIntersection",
            "$setIntersection: [ \"array1\", \"array2\" ]",
            "set operator",
        ),
        entry(
            "$setIsSubset",
            "$setIsSubset: [ \"expression1\", \"expression2\" ]",
            "set operator",
        ),
        entry("$setUnion", "$setUnion: [ \"expression1\", \"expression2\" ]", "set operator"),
        entry("$sin", "$sin: \"expression\"", "trigonometry operator"),
        entry("$size", "$size: \"expression\"", "array operator"),
        entry("$skip", "$skip", "aggregation stage"),
        entry("$slice", "$slice: [ \"array\", \"n\" ]", "array operator"),
        entry("$sort:", "$sort: { }", "aggregation stage"),
        entry("$sortByCount", "$sortByCount:  \"expression\"", "aggregation stage"),
        entry(
            "$split",
            "$split: [ \"string expression\", \"delimiter\" ]",
            "string operator",
        ),
        entry("$sqrt", "$sqrt: 12", "arithmetic operator"),
        entry("$stdDevPop", "$stdDevPop: \"expression\"", "accumulation operator"),
        entry("$stdDevSamp", "$stdDevSamp: \"expression\"", "accumulation operator"),
        entry("$strLenBytes", "$strLenBytes: \"string expression\"", "string operator"),
        entry("$strLenCP", "$strLenCP: \"string expression\"", "string operator"),
        entry(
            "$strcasecmp",
            "$strcasecmp: [ \"expression1\", \"expression2\" ]",
            "string operator",
        ),
        entry("$substr", "$substr: [ \"string\", \"start\", \"length\" ]", "string operator"),
        entry(
            "$substrBytes",
            "$substrBytes: [ \"string expression\", \"byte index\", \"byte count\" ]",
            "string operator",
        ),
        entry(
            "$substrCP",
            "$substrCP: [ \"string expression\", \"code point index\", \"code point count\" ]",
            "string operator",
        ),
        entry(
            "$subtract",
            "$subtract: [ \"expression1\", \"expression2\" ]",
            "arithmetic operator",
        ),
        entry("$sum", "$sum: \"expression\"", "accumulation operator"),
        entry(
            "$switch",
            "$switch: {\n \"branches\": [\n { \"case\": \"expression\", \"then\": \"expression\" } \n]\n}",
            "conditional operator",
        ),
        entry("$tan", "$tan: \"expression\"", "trigonometry operator"),
        entry("$toBool", "$toBool: \"expression\"", "type operator"),
        entry("$toDate", "$toDate: \"expression\"", "type operator"),
        entry("$toDecimal", "$toDecimal: \"expression\"", "type operator"),
        entry("$toDouble", "$toDouble: \"expression\"", "type operator"),
        entry("$toInt", "$toInt: \"expression\"", "type operator"),
        entry("$toLong", "$toLong: \"expression\"", "type operator"),
        entry("$toLower", "$toLower: \"expression\"", "string operator"),
        entry("$toObjectId", "$toObjectId: \"expression\"", "type operator"),
        entry("$toString", "$toString: \"expression\"", "type operator"),
        entry("$toUpper", "$toUpper: \"expression\"", "string operator"),
        entry(
            "$trim",
            "$trim: { \"input\": \"string\",  \"chars\": \"string\" }",
            "string operator",
        ),
        entry("$trunc", "$trunc : [ \"number\", \"place\" ]", "arithmetic operator"),
        entry("$type", "$type: \"expression\"", "type operator"),
        entry(
            "$unionWith",
            "$unionWith: { \"coll\": \"collection\", \"pipeline\": [ \"stage1\" ] }",
            "aggregation stage",
        ),
        entry("$unset", "$unset: \"field\"", "aggregation stage"),
        entry("$unwind", "$unwind: \"field path\"", "aggregation stage"),
        entry("$week", "$week: \"dateExpression\"", "date operator"),
        entry("$where", "$where: \"code\"", "aggregation operator"),
        entry("$year", "$year: \"dateExpression\"", "date operator"),
        entry(
            "$zip",
            "$zip: {\n \"inputs\": [ \"array expression1\" ],\n \"useLongestLength\": \"boolean\",\n \"defaults\":  \"array expression\"\n}",
            "array operator",
        ),
        entry(
            "$dateAdd",
            "$dateAdd: {\n \"startDate\": \"dateExpression\",\n \"unit\": \"Unit\",\n \"amount\": \"int\",\n \"timezone\": \"tzExpression\"\n}",
            "date operator",
        ),
        entry(
            "$dateDiff",
            "$dateDiff: {\n \"startDate\": \"dateExpression\",\n \"unit\": \"Unit\",\n \"amount\": \"int\",\n \"timezone\": \"tzExpression\",\n \"startOfWeek\": \"day\"\n}",
            "date operator",
        ),
        entry(
            "$dateSubtract",
            "$dateSubtract: {\n \"startDate\": \"dateExpression\",\n \"unit\": \"Unit\",\n \"amount\": \"int\",\n \"timezone\": \"tzExpression\"\n}",
            "date operator",
        ),
        entry(
            "$getField",
            "$getField: { \"fields\": \"string\", \"input\": \"object\" }",
            "aggregation operator",
        ),
        entry(
            "$setField",
            "$setField: { \"fields\": \"string\", \"input\": \"object\", \"value\": \"expression\" }",
            "aggregation operator",
        ),
        entry("$sampleRate", "$sampleRate: \"non negative float\"", "aggregation operator"),
        entry("$rand", "$rand: {}", "aggregation operator"),
        entry(
            "$setWindowFields",
            "$setWindowFields: {\n \"partitionBy\": \"$state\",\n \"sortBy\": { \"field\": \"order\" },\n \"output\": {\n  \"field\": {\n  \"window operator\": \"window operator param\",\n  \"window\": {\n   \"documents\": [ \"lower boundary\", \"upper boundary\" ],\n   \"range\": [ \"lower boundary\", \"upper boundary\" ],\n   \"unit\": \"time unit\"\n  }\n  }\n }\n}",
            "aggregation stage",
        ),
    ])
}

/// Update operators, the fallback for queries that are neither `.find(`
/// nor `.aggregate(`.
fn update_operators() -> Catalog {
    Catalog::new(vec![
        entry("$currentDate", "$currentDate: \"expression\"", "update operator"),
        entry("$inc", "$inc: { \"field\": 1 }", "update operator"),
        entry("$min", "$min: \"expression\"", "update operator"),
        entry("$max", "$max: \"expression\"", "update operator"),
        entry("$mul", "$mul: { \"field\": 2 }", "update operator"),
        entry("$rename", "$rename: { \"field\": \"newName\" }", "update operator"),
        entry("$set", "$set: { \"field\": \"value\" }", "update operator"),
        entry(
            "$setOnInsert",
            "$setOnInsert: { \"field\": \"value\" }",
            "update operator",
        ),
        entry("$unset", "$unset: { \"field\": \"\" }", "update operator"),
        entry("$addToSet", "$addToSet: \"expression\"", "update operator"),
        entry("$pop", "$pop: \"expression\"", "update operator"),
        entry("$pull", "$pull: \"expression\"", "update operator"),
        entry("$push", "$push: \"expression\"", "update operator"),
        entry(
            "$pullAll",
            "$pullAll: { \"field\": [\"value1\", \"value2\"] }",
            "update operator",
        ),
        entry("$each", "$each: [\"value1\", \"value2\"]", "update operator"),
        entry("$position", "$position: 0", "update operator"),
        entry("$slice", "$slice: 2", "update operator"),
        entry("$sort", "$sort: \"expression\"", "update operator"),
        entry("$bit", "$bit: { \"field\": { \"and|or|xor\": 4} }", "update operator"),
    ])
}
